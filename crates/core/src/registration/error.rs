//! Registration error types.

use thiserror::Error;

/// Errors raised while decoding or normalizing the form payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// The `data` field is absent, not JSON, or not shaped like the form.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// A required field is present but blank.
    #[error("required field is empty: {0}")]
    MissingField(&'static str),
}

impl RegistrationError {
    /// Create a malformed payload error.
    #[must_use]
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedPayload(msg.into())
    }
}
