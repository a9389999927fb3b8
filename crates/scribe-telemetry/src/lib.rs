//! Telemetry for Scribe
//!
//! Structured logging via the `tracing` ecosystem

use scribe_config::TelemetryConfig;

/// Initialize logging from configuration
///
/// The filter directive is resolved from `RUST_LOG` first, then the
/// configured filter, then the given fallback. An unparsable directive
/// falls back to `info`.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init(config: Option<&TelemetryConfig>, default_filter: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let directive = std::env::var("RUST_LOG")
        .ok()
        .or_else(|| config.and_then(|c| c.filter.clone()))
        .unwrap_or_else(|| default_filter.to_owned());

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if config.is_some_and(|c| c.json) {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
