use serde::Deserialize;

/// Cross-origin response header configuration
///
/// The allowed methods and headers are fixed properties of the service, so
/// only the origin is configurable here.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Value sent as `Access-Control-Allow-Origin` on every response
    #[serde(default = "default_origin")]
    pub origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

fn default_origin() -> String {
    "*".to_string()
}
