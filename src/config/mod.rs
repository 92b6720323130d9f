//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → CatalogConfig (validated, immutable)
//!     → handed to the server or the CLI client at startup
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks
//! - One file serves both binaries; each reads the sections it needs

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::ApiConfig;
pub use schema::CatalogConfig;
pub use schema::LogFormat;
pub use schema::ObservabilityConfig;
pub use schema::ServerConfig;
