//! Typed Rust client for the product catalog HTTP API.
//!
//! ```no_run
//! use catalog_sdk::{ProductClient, ProductPayload};
//!
//! # async fn demo() -> Result<(), catalog_sdk::ApiError> {
//! let client = ProductClient::new("http://localhost:5000");
//! let created = client
//!     .create_product(&ProductPayload::new("Lamp", 19.5, ""))
//!     .await?;
//! println!("{} -> {}", created.id, created.name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::ProductClient;
pub use error::{ApiError, ApiResult};
pub use types::{ErrorBody, Product, ProductId, ProductPayload};
