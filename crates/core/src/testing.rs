//! In-memory doubles for the pipeline seams.

use std::sync::Mutex;

use bytes::Bytes;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::attachment::{
    Attachment, AttachmentError, AttachmentRepository, FileUpload, NewAttachment,
};
use crate::notification::{Notification, NotificationError, NotificationRoute, NotificationSink};
use crate::registration::{RegistrationPayload, Submission};
use crate::storage::{BlobStore, PresignedUrl, StorageError};
use crate::submission::{StoredSubmission, SubmissionError, SubmissionRepository};

/// Insert time reported by [`MemorySubmissions`]: 2024-03-05 17:07:09 UTC.
pub fn stored_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 17, 7, 9)
        .single()
        .expect("valid timestamp")
}

/// The smallest valid payload: every optional field absent.
pub fn sample_payload() -> RegistrationPayload {
    RegistrationPayload {
        executive_name: "Ana Silva".into(),
        executive_cpf: "123.456.789-00".into(),
        executive_email: "ana@x.com".into(),
        company_name: "Acme LLC".into(),
        company_cnpj: "11.222.333/0001-44".into(),
        company_type: "LTDA".into(),
        company_activity: "Retail".into(),
        address_cep: "01000-000".into(),
        address_street: "Rua A".into(),
        address_number: "10".into(),
        address_neighborhood: "Centro".into(),
        address_city: "São Paulo".into(),
        address_state: "SP".into(),
        ..Default::default()
    }
}

/// [`sample_payload`] normalized.
pub fn sample_submission() -> Submission {
    Submission::from_payload(sample_payload()).expect("sample payload is valid")
}

/// [`sample_payload`] as the raw `data` field.
pub fn sample_data() -> String {
    serde_json::to_string(&sample_payload()).expect("payload serializes")
}

/// A PDF file part.
pub fn file(field: &str, name: &str, content: &[u8]) -> FileUpload {
    FileUpload {
        field_name: field.to_string(),
        file_name: name.to_string(),
        content_type: "application/pdf".to_string(),
        content: Bytes::copy_from_slice(content),
    }
}

#[derive(Default)]
pub struct MemorySubmissions {
    rows: Mutex<Vec<(Uuid, Submission)>>,
    fail: bool,
}

impl MemorySubmissions {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<(Uuid, Submission)> {
        self.rows.lock().unwrap().clone()
    }
}

impl SubmissionRepository for MemorySubmissions {
    async fn insert(&self, record: &Submission) -> Result<StoredSubmission, SubmissionError> {
        if self.fail {
            return Err(SubmissionError::persistence("connection refused"));
        }
        let id = Uuid::new_v4();
        self.rows.lock().unwrap().push((id, record.clone()));
        Ok(StoredSubmission {
            id,
            created_at: stored_at(),
        })
    }
}

#[derive(Default)]
pub struct MemoryAttachments {
    rows: Mutex<Vec<Attachment>>,
    fail: bool,
}

impl MemoryAttachments {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<Attachment> {
        self.rows.lock().unwrap().clone()
    }
}

impl AttachmentRepository for MemoryAttachments {
    async fn create(&self, input: NewAttachment) -> Result<Attachment, AttachmentError> {
        if self.fail {
            return Err(AttachmentError::metadata("insert rejected"));
        }
        let row = Attachment {
            id: Uuid::new_v4(),
            submission_id: input.submission_id,
            file_name: input.file_name,
            file_path: input.file_path,
            file_size: input.file_size,
            file_type: input.file_type,
            field_name: input.field_name,
            created_at: stored_at(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }
}

pub struct MemoryBlobs {
    keys: Mutex<Vec<String>>,
    failing_names: Vec<String>,
    signable: bool,
}

impl Default for MemoryBlobs {
    fn default() -> Self {
        Self {
            keys: Mutex::default(),
            failing_names: Vec::new(),
            signable: true,
        }
    }
}

impl MemoryBlobs {
    /// Uploads fail for keys ending in any of `names`.
    pub fn failing_uploads(names: &[&str]) -> Self {
        Self {
            failing_names: names.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    pub fn unsignable() -> Self {
        Self {
            signable: false,
            ..Self::default()
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

impl BlobStore for MemoryBlobs {
    async fn upload(
        &self,
        key: &str,
        _content: Bytes,
        _content_type: &str,
    ) -> Result<(), StorageError> {
        if self.failing_names.iter().any(|name| key.ends_with(name.as_str())) {
            return Err(StorageError::operation("bucket unavailable"));
        }
        self.keys.lock().unwrap().push(key.to_string());
        Ok(())
    }

    async fn signed_url(&self, key: &str) -> Result<PresignedUrl, StorageError> {
        if !self.signable {
            return Err(StorageError::PresignNotSupported);
        }
        Ok(PresignedUrl {
            url: format!("https://blobs.test/{key}?signed"),
            expires_at: stored_at(),
        })
    }
}

#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<(NotificationRoute, Notification)>>,
    fail: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(NotificationRoute, Notification)> {
        self.sent.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    async fn send(
        &self,
        route: &NotificationRoute,
        notification: &Notification,
    ) -> Result<(), NotificationError> {
        if self.fail {
            return Err(NotificationError::delivery("smtp unreachable"));
        }
        self.sent
            .lock()
            .unwrap()
            .push((route.clone(), notification.clone()));
        Ok(())
    }
}
