//! Google Generative Language API client

use std::time::Duration;

use reqwest::Client;
use scribe_config::ProviderConfig;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::BriefError;
use crate::protocol::{GenerateContentRequest, GenerateContentResponse};

/// Default Google Generative Language API base URL
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Generative Language API client
pub struct GoogleProvider {
    client: Client,
    base_url: Url,
    model: String,
    api_key: SecretString,
}

impl GoogleProvider {
    /// Create from provider configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded default base URL is invalid (should never happen).
    pub fn new(config: &ProviderConfig) -> anyhow::Result<Self> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| Url::parse(DEFAULT_BASE_URL).expect("valid default URL"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            base_url,
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Send a prompt to the model and return the generated text
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the provider responds with a
    /// non-success status, or the response carries no text.
    pub async fn generate(&self, prompt: String) -> Result<String, BriefError> {
        let wire_request = GenerateContentRequest::user_text(prompt);
        let url = self.generate_url();

        let response = self
            .client
            .post(&url)
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                // Strip the URL, which carries the API key as a query parameter
                let e = e.without_url();
                tracing::error!(model = %self.model, error = %e, "upstream request failed");
                BriefError::Upstream(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(model = %self.model, status = %status, "upstream returned error");
            return Err(BriefError::Upstream(format!(
                "provider returned {status}: {body}"
            )));
        }

        let wire_response: GenerateContentResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::warn!(model = %self.model, error = %e, "upstream response was not valid JSON");
            BriefError::Upstream(format!("failed to parse response: {e}"))
        })?;

        match wire_response.first_text() {
            Some(text) => Ok(text.to_owned()),
            None => {
                let finish_reason = wire_response.finish_reason().unwrap_or("unreported");
                tracing::warn!(
                    model = %self.model,
                    finish_reason,
                    "upstream response carried no text"
                );
                Err(BriefError::MissingContent)
            }
        }
    }

    /// Build the `generateContent` endpoint URL, keyed for this provider
    fn generate_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        let model = &self.model;
        let key = self.api_key.expose_secret();
        format!("{base}/models/{model}:generateContent?key={key}")
    }
}
