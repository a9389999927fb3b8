use http::StatusCode;
use thiserror::Error;

/// Errors that can occur while generating a brief
#[derive(Debug, Error)]
pub enum BriefError {
    /// Request body was not valid JSON for a brief request
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// Upstream provider returned an error
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Provider response carried no usable text
    #[error("model returned no content")]
    MissingContent,
}

impl BriefError {
    /// Status code reported to the client
    ///
    /// Callers see a single coarse failure mode: anything that goes wrong
    /// after the request reaches the endpoint is a 500 with a detail string.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) | Self::Upstream(_) | Self::MissingContent => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
