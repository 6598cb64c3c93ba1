//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Form is not in a submittable state
    #[error("Validation error: {0}")]
    Validation(String),

    /// Role id has no entry in the role map
    #[error("Unknown role id: {0}")]
    UnknownRoleId(i64),

    /// Role name / form key has no entry in the role map
    #[error("Unknown role: {0}")]
    UnknownRoleName(String),

    /// Update attempted on a form that was never seeded from a user record
    #[error("User id is missing; cannot issue an update")]
    MissingUserId,

    /// Remote API answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport failure (connection refused, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Request or response could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, rejected request, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::UnknownRoleId(_) | Self::UnknownRoleName(_) => true,
            Self::Api { status, .. } => (400..500).contains(status),
            Self::MissingUserId | Self::Network(_) | Self::Serialization(_) => false,
        }
    }

    /// Message suitable for showing to the user.
    ///
    /// API errors carry the server-provided text verbatim; everything else
    /// falls back to the display form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
