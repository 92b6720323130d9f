//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Server handlers and client operations produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters, gauges, histograms via `metrics`)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Prometheus scrape endpoint (server only, optional)
//! ```
//!
//! # Design Decisions
//! - Structured fields, never interpolated strings, for machine parsing
//! - Request ID flows into the server's trace spans
//! - Metric calls are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
