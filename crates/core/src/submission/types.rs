//! Submission types.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::attachment::FileUpload;
use crate::registration::Submission;

/// One decoded intake request.
#[derive(Debug, Clone, Default)]
pub struct SubmissionRequest {
    /// Raw JSON of the `data` form field, if it was sent.
    pub data: Option<String>,
    /// File parts, in arrival order.
    pub files: Vec<FileUpload>,
}

/// Row identity returned by the submission store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredSubmission {
    /// Generated id.
    pub id: Uuid,
    /// Insert timestamp.
    pub created_at: DateTime<Utc>,
}

/// Outcome of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Id of the stored record.
    pub submission_id: Uuid,
    /// The normalized record that was stored.
    pub record: Submission,
    /// Attachment links that made it into the notification.
    pub attachment_links: Vec<String>,
    /// Whether the notification was handed off successfully.
    pub notified: bool,
}
