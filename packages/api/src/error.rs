use domain::DomainError;
use thiserror::Error;

/// Errors surfaced by a [`crate::Backend`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] DomainError),
}

impl ApiError {
    /// Whether trying the same request again may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if e.is_builder() {
            ApiError::InvalidUrl(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Status {
                status: status.as_u16(),
                body: e.to_string(),
            }
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(e: url::ParseError) -> Self {
        ApiError::InvalidUrl(e.to_string())
    }
}
