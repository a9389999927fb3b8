//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use scribe_config::{Config, CorsConfig, HealthConfig, ProviderConfig, ServerConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with the provider pointed at a mock backend
    pub fn new(base_url: &str) -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: CorsConfig::default(),
                },
                provider: ProviderConfig {
                    api_key: SecretString::from("test-key"),
                    model: "gemini-2.0-flash".to_owned(),
                    base_url: Some(base_url.parse().expect("valid URL")),
                    timeout_secs: 5,
                },
                telemetry: None,
            },
        }
    }

    /// Set the provider model
    pub fn with_model(mut self, model: &str) -> Self {
        self.config.provider.model = model.to_owned();
        self
    }

    /// Set the upstream timeout in seconds
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.config.provider.timeout_secs = timeout_secs;
        self
    }

    /// Set the allowed cross-origin value
    pub fn with_cors_origin(mut self, origin: &str) -> Self {
        self.config.server.cors.origin = origin.to_owned();
        self
    }

    /// Move the health endpoint to a custom path
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
