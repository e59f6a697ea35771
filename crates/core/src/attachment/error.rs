//! Attachment error types.

use thiserror::Error;

use crate::storage::StorageError;

/// Failure while processing one file. Never aborts the submission.
#[derive(Debug, Error)]
pub enum AttachmentError {
    /// Blob upload failed; no metadata or link was produced.
    #[error("upload of {key} failed: {source}")]
    Upload {
        /// Storage key of the file.
        key: String,
        /// Underlying storage error.
        source: StorageError,
    },

    /// Metadata insert failed after a successful upload.
    #[error("metadata insert failed: {0}")]
    Metadata(String),

    /// Signed link could not be minted.
    #[error("signing {key} failed: {source}")]
    Signing {
        /// Storage key of the file.
        key: String,
        /// Underlying storage error.
        source: StorageError,
    },
}

impl AttachmentError {
    /// Create a metadata error.
    #[must_use]
    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::Metadata(msg.into())
    }
}
