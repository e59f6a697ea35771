//! Attachment types and data structures.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One file part read from the multipart request.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Form field name, always starting with `file_`.
    pub field_name: String,
    /// Original file name as sent by the browser.
    pub file_name: String,
    /// Declared content type.
    pub content_type: String,
    /// File bytes.
    pub content: Bytes,
}

impl FileUpload {
    /// Size in bytes.
    #[must_use]
    pub fn size(&self) -> i64 {
        i64::try_from(self.content.len()).unwrap_or(i64::MAX)
    }
}

/// Input for creating an attachment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttachment {
    /// Owning submission.
    pub submission_id: Uuid,
    /// Original file name.
    pub file_name: String,
    /// Storage key.
    pub file_path: String,
    /// Size in bytes.
    pub file_size: i64,
    /// Declared content type.
    pub file_type: String,
    /// Form field name.
    pub field_name: String,
}

/// Attachment domain model.
#[derive(Debug, Clone)]
pub struct Attachment {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning submission.
    pub submission_id: Uuid,
    /// Original file name.
    pub file_name: String,
    /// Storage key.
    pub file_path: String,
    /// Size in bytes.
    pub file_size: i64,
    /// Declared content type.
    pub file_type: String,
    /// Form field name.
    pub field_name: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
