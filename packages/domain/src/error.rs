use thiserror::Error;

/// Errors raised by the pure domain layer before anything touches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A sheet name was blank after trimming.
    #[error("Sheet name is required")]
    EmptyName,

    /// The profile has not been fetched yet.
    #[error("Profile data is not available yet")]
    DataUnavailable,

    #[error("Invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
}
