//! Structured logging.
//!
//! `RUST_LOG` takes precedence; otherwise the configured level applies to
//! this crate, the SDK and `tower_http`.

use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::{LogFormat, ObservabilityConfig};

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    format!("product_catalog={level},catalog_sdk={level},catalog_cli={level},tower_http={level}")
}

/// Install the global subscriber writing to stdout.
pub fn init_logging(config: &ObservabilityConfig) {
    install(config, std::io::stdout);
}

/// Install the global subscriber writing to stderr, keeping stdout free for
/// interactive output.
pub fn init_stderr_logging(config: &ObservabilityConfig) {
    install(config, std::io::stderr);
}

/// Calling this twice is harmless; the first subscriber stays in place.
fn install<W>(config: &ObservabilityConfig, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(&config.log_level).into());

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.log_format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(writer))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .try_init(),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "Logging already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_covers_crates() {
        let directive = default_directive("DEBUG");
        assert!(directive.contains("product_catalog=debug"));
        assert!(directive.contains("tower_http=debug"));
        assert!(directive.parse::<EnvFilter>().is_ok());
    }
}
