//! Error types for the Mixjar SDK.

use thiserror::Error;

/// Main error type for all Mixcloud and Hearthis operations.
///
/// Transport failures and non-2xx statuses surface as [`MixjarError::RequestError`],
/// body mismatches as [`MixjarError::ParseError`]. Nothing is retried.
#[derive(Debug, Error)]
pub enum MixjarError {
    /// HTTP request failed or the provider answered with an error status.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A construction parameter was rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The endpoint needs an access token and none was configured.
    #[error("Missing access token for {0}")]
    MissingAccessToken(String),
}

/// Result type alias for Mixjar operations.
pub type Result<T> = std::result::Result<T, MixjarError>;
