//! Shared state for brief route handlers

use std::sync::Arc;

use scribe_config::ProviderConfig;

use crate::error::BriefError;
use crate::prompt;
use crate::provider::GoogleProvider;
use crate::types::{BriefRequest, BriefResponse};

/// Shared state for brief route handlers
#[derive(Clone)]
pub struct BriefState {
    inner: Arc<BriefStateInner>,
}

struct BriefStateInner {
    provider: GoogleProvider,
}

impl BriefState {
    /// Build `BriefState` from provider configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the provider client cannot be constructed.
    pub fn from_config(config: &ProviderConfig) -> anyhow::Result<Self> {
        let provider = GoogleProvider::new(config)?;
        Ok(Self {
            inner: Arc::new(BriefStateInner { provider }),
        })
    }

    /// Run the brief pipeline from raw body bytes to generated text
    ///
    /// The body must be a JSON object; an absent body is not valid JSON and
    /// fails like any other malformed input.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON for a brief request or
    /// the provider call fails.
    pub async fn generate(&self, body: &[u8]) -> Result<BriefResponse, BriefError> {
        let request: BriefRequest = serde_json::from_slice(body)?;
        let prompt = prompt::render(&request);

        let brief = self.inner.provider.generate(prompt).await?;

        tracing::debug!(chars = brief.len(), "brief generated");
        Ok(BriefResponse { brief })
    }
}
