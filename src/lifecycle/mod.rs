//! Lifecycle management.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init logging/metrics → Load store → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C or trigger() → Stop accepting → Drain in-flight requests → Save store
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
