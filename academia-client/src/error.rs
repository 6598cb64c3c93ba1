//! Client error types

use academia_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Errors produced while talking to the `/users` API
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// Connection refused, DNS failure, body read failure, ...
    #[error("Network error: {detail}")]
    NetworkError { detail: String },

    /// The request exceeded the configured timeout
    #[error("Request timeout: {detail}")]
    Timeout { detail: String },

    /// Non-2xx answer; `message` is extracted from the error payload
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body is not the expected JSON
    #[error("Parse error: {detail}")]
    ParseError { detail: String },

    /// Request body could not be encoded
    #[error("Serialization error: {detail}")]
    SerializationError { detail: String },

    /// The HTTP client could not be built from the given configuration
    #[error("Invalid client configuration: {detail}")]
    InvalidConfig { detail: String },
}

impl ClientError {
    /// Whether it is expected behavior (rejected input, missing record, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Api { status, .. } if (400..500).contains(status))
    }
}

impl From<ClientError> for CoreError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NetworkError { detail }
            | ClientError::Timeout { detail }
            | ClientError::InvalidConfig { detail } => CoreError::Network(detail),
            ClientError::Api { status, message } => CoreError::Api { status, message },
            ClientError::ParseError { detail } | ClientError::SerializationError { detail } => {
                CoreError::Serialization(detail)
            }
        }
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
