//! Unified error handling.

use thiserror::Error;

/// Result type alias for tootstats operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// Every variant is fatal to a run: nothing in the aggregation pass retries.
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed or the response body could not be decoded
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("API error: {status} {detail}")]
    Api { status: u16, detail: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization failed
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create an API status error.
    pub fn api(status: u16, detail: impl Into<String>) -> Self {
        Self::Api {
            status,
            detail: detail.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the error came from talking to the remote server.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Api { .. })
    }
}
