//! Error types for metadata providers.

use thiserror::Error;

/// Errors that can occur when talking to a metadata provider.
///
/// These never leave a provider's `search`: adapters log them and return an
/// empty result instead.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// HTTP request failed (transport error or timeout)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("{provider} returned status {status}")]
    Status { provider: &'static str, status: u16 },

    /// Failed to parse provider response
    #[error("Failed to parse {provider} response: {message}")]
    Parse {
        provider: &'static str,
        message: String,
    },

    /// Provider configuration is unusable
    #[error("Invalid provider configuration: {0}")]
    Config(String),
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

impl From<ProviderError> for songtag_core::SongTagError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Config(msg) => songtag_core::SongTagError::InvalidInput(msg),
            other => songtag_core::SongTagError::Network(other.to_string()),
        }
    }
}
