#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod provider;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use cors::*;
pub use health::*;
pub use provider::*;
pub use server::*;
pub use telemetry::TelemetryConfig;

/// Top-level Scribe configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Generative language provider configuration
    pub provider: ProviderConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
