//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the product handlers
//! - Wire up middleware (request ID, tracing, CORS, timeout, body limit)
//! - Serve on a listener until shutdown, then save the store

use axum::{
    body::Body,
    http::Request,
    routing::get,
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::handlers;
use crate::http::request::{request_id_of, MakeRequestUuidV4};
use crate::lifecycle::shutdown;
use crate::store::ProductStore;

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: ProductStore,
}

/// HTTP server for the product API.
pub struct CatalogServer {
    router: Router,
    config: ServerConfig,
    store: ProductStore,
}

impl CatalogServer {
    pub fn new(config: ServerConfig, store: ProductStore) -> Self {
        let state = AppState {
            store: store.clone(),
        };
        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            store,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id_of(request),
            )
        });

        Router::new()
            .route(
                "/products",
                get(handlers::list_products).post(handlers::create_product),
            )
            .route(
                "/products/{id}",
                get(handlers::get_product)
                    .put(handlers::update_product)
                    .delete(handlers::delete_product),
            )
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
            .layer(CorsLayer::permissive())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(trace)
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// Serve on `listener` until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            products = self.store.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        if let Err(e) = self.store.save_async().await {
            tracing::error!(error = %e, "Failed to save products on shutdown");
        }
        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }
}
