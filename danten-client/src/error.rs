//! Client error types

use shared::error::ErrorCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Map onto the shared error code table
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            Self::Http(_) => ErrorCode::NetworkError,
            Self::Status { .. } => ErrorCode::NetworkError,
            Self::InvalidResponse(_) | Self::Serialization(_) => ErrorCode::InvalidFormat,
            Self::Config(_) => ErrorCode::ConfigError,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ClientError::Status {
            status: 502,
            body: "bad gateway".into(),
        };
        assert_eq!(err.code(), ErrorCode::NetworkError);
        assert_eq!(err.to_string(), "Unexpected status 502: bad gateway");

        let err = ClientError::InvalidResponse("missing table".into());
        assert_eq!(err.code(), ErrorCode::InvalidFormat);

        let err = ClientError::Config("bad url".into());
        assert_eq!(err.code(), ErrorCode::ConfigError);
    }
}
