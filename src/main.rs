//! Product catalog API server.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │               PRODUCT CATALOG                │
//!   catalog-cli /     │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!   browser page ─────┼─▶│  http   │───▶│ handlers │───▶│  store  │  │
//!                     │  │ server  │    │  (CRUD)  │    │(DashMap)│  │
//!                     │  └─────────┘    └──────────┘    └────┬────┘  │
//!                     │                                      │       │
//!                     │                              products.json   │
//!                     │                                              │
//!                     │   config · observability · lifecycle         │
//!                     └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use product_catalog::config::load_or_default;
use product_catalog::observability::{logging, metrics};
use product_catalog::{CatalogServer, ProductStore, Shutdown};

#[derive(Parser)]
#[command(name = "product-catalog")]
#[command(about = "HTTP JSON API for the product catalog", long_about = None)]
struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `server.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override `server.data_file`.
    #[arg(short, long)]
    data_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut config = load_or_default(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }
    if let Some(data_file) = args.data_file {
        config.server.data_file = Some(data_file);
    }

    logging::init_logging(&config.observability);
    tracing::info!("product-catalog v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.server.bind_address,
        data_file = ?config.server.data_file,
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let store = match &config.server.data_file {
        Some(path) => ProductStore::load_from_file(path)?,
        None => ProductStore::new(None),
    };

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let server = CatalogServer::new(config.server, store);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
