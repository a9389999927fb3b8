use serde::Deserialize;

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Filter directive applied when `RUST_LOG` is unset
    #[serde(default)]
    pub filter: Option<String>,
    /// Emit log lines as JSON
    #[serde(default)]
    pub json: bool,
}
