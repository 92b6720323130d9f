//! Product catalog: an HTTP JSON product API and the list/form client that
//! drives it.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;
pub mod ui;

pub use config::CatalogConfig;
pub use http::CatalogServer;
pub use lifecycle::Shutdown;
pub use store::ProductStore;
pub use ui::ProductListController;
