//! Submission error types.

use thiserror::Error;

use crate::registration::RegistrationError;

/// Errors that abort a submission.
///
/// Anything raised after the record is stored is logged, never returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// The request or its `data` field could not be decoded.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// A required field was blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The record could not be stored.
    #[error("Failed to store submission: {0}")]
    PersistenceFailure(String),
}

impl SubmissionError {
    /// Create a malformed payload error.
    #[must_use]
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedPayload(msg.into())
    }

    /// Create a persistence error.
    #[must_use]
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::PersistenceFailure(msg.into())
    }
}

impl From<RegistrationError> for SubmissionError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::MalformedPayload(msg) => Self::MalformedPayload(msg),
            RegistrationError::MissingField(field) => Self::MissingField(field),
        }
    }
}
