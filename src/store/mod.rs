//! Product storage.
//!
//! A concurrent in-memory map of products with optional JSON-file
//! persistence. Ids come from a process-wide counter and are never reused.

pub mod products;

pub use products::{NewProduct, ProductChanges, ProductStore};
