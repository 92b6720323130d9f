//! Metrics collection and exposition.
//!
//! # Metrics
//! - `catalog_requests_total` (counter): API requests by operation, status
//! - `catalog_request_duration_seconds` (histogram): handler latency by operation
//! - `catalog_products` (gauge): number of stored products

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter with an HTTP listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(
            address = %addr,
            error = %e,
            "Failed to install metrics exporter"
        ),
    }
}

/// Record one handled API request.
pub fn record_request(operation: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "catalog_requests_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("catalog_request_duration_seconds", "operation" => operation)
        .record(start.elapsed().as_secs_f64());
}

/// Record the current size of the product store.
pub fn record_catalog_size(size: usize) {
    metrics::gauge!("catalog_products").set(size as f64);
}
