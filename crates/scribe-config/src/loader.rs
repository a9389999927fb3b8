use std::path::Path;

use http::HeaderValue;
use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded = crate::env::expand_env(&raw)
            .map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self =
            toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the provider or server settings are invalid
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_provider()?;
        self.validate_server()?;
        Ok(())
    }

    fn validate_provider(&self) -> anyhow::Result<()> {
        if self.provider.api_key.expose_secret().is_empty() {
            anyhow::bail!("provider.api_key must not be empty");
        }

        if self.provider.model.is_empty() {
            anyhow::bail!("provider.model must not be empty");
        }

        if self.provider.timeout_secs == 0 {
            anyhow::bail!("provider.timeout_secs must be greater than 0");
        }

        Ok(())
    }

    fn validate_server(&self) -> anyhow::Result<()> {
        let origin = &self.server.cors.origin;
        if origin.is_empty() {
            anyhow::bail!("server.cors.origin must not be empty");
        }
        if HeaderValue::from_str(origin).is_err() {
            anyhow::bail!("server.cors.origin is not a valid header value: '{origin}'");
        }

        // Routes that do not start with '/' make router construction panic
        if !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        Ok(())
    }
}
