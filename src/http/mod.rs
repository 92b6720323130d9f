//! HTTP API subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned and echoed back)
//!     → handlers.rs (product CRUD against the store)
//!     → response.rs (failures rendered as {"error": "..."})
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, CatalogServer};
