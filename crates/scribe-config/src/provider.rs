use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Configuration for the Google Generative Language provider
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// API key sent to the provider as the `key` query parameter
    pub api_key: SecretString,
    /// Model used for brief generation
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_timeout_secs() -> u64 {
    60
}
