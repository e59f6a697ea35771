//! Attachment processor implementation.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};
use uuid::Uuid;

use super::error::AttachmentError;
use super::types::{Attachment, FileUpload, NewAttachment};
use crate::storage::{BlobStore, storage_key};

/// Repository trait for attachment metadata.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait AttachmentRepository: Send + Sync {
    /// Create a new attachment record.
    fn create(
        &self,
        input: NewAttachment,
    ) -> impl Future<Output = Result<Attachment, AttachmentError>> + Send;
}

/// Uploads files, records their metadata and mints signed links.
pub struct AttachmentProcessor<R: AttachmentRepository, B: BlobStore> {
    repo: Arc<R>,
    blobs: Arc<B>,
}

impl<R: AttachmentRepository, B: BlobStore> AttachmentProcessor<R, B> {
    /// Create a new attachment processor.
    #[must_use]
    pub fn new(repo: Arc<R>, blobs: Arc<B>) -> Self {
        Self { repo, blobs }
    }

    /// Processes one file and returns its `"<field name>: <signed URL>"` line.
    ///
    /// Metadata is recorded only after the upload succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload, the metadata insert, or signing fails.
    pub async fn process(
        &self,
        submission_id: Uuid,
        file: FileUpload,
    ) -> Result<String, AttachmentError> {
        let key = storage_key(submission_id, &file.field_name, &file.file_name);
        self.store(submission_id, key, file).await
    }

    async fn store(
        &self,
        submission_id: Uuid,
        key: String,
        file: FileUpload,
    ) -> Result<String, AttachmentError> {
        let file_size = file.size();

        self.blobs
            .upload(&key, file.content, &file.content_type)
            .await
            .map_err(|source| AttachmentError::Upload {
                key: key.clone(),
                source,
            })?;

        let attachment = self
            .repo
            .create(NewAttachment {
                submission_id,
                file_name: file.file_name,
                file_path: key.clone(),
                file_size,
                file_type: file.content_type,
                field_name: file.field_name.clone(),
            })
            .await?;

        let signed = self
            .blobs
            .signed_url(&key)
            .await
            .map_err(|source| AttachmentError::Signing { key, source })?;

        debug!(
            submission_id = %submission_id,
            attachment_id = %attachment.id,
            field = %file.field_name,
            expires_at = %signed.expires_at,
            "Attachment stored"
        );

        Ok(format!("{}: {}", file.field_name, signed.url))
    }

    /// Processes every file concurrently and returns the links that succeeded.
    ///
    /// Each file gets its own key, see [`distinct_keys`]. Failures are logged
    /// and skipped.
    pub async fn process_all(&self, submission_id: Uuid, files: Vec<FileUpload>) -> Vec<String> {
        let labels: Vec<(String, String)> = files
            .iter()
            .map(|f| (f.field_name.clone(), f.file_name.clone()))
            .collect();
        let keys = distinct_keys(submission_id, &files);

        let results = join_all(
            files
                .into_iter()
                .zip(keys)
                .map(|(file, key)| self.store(submission_id, key, file)),
        )
        .await;

        results
            .into_iter()
            .zip(labels)
            .filter_map(|(result, (field, file_name))| match result {
                Ok(link) => Some(link),
                Err(e) => {
                    warn!(
                        submission_id = %submission_id,
                        field = %field,
                        file_name = %file_name,
                        error = %e,
                        "Attachment skipped"
                    );
                    None
                }
            })
            .collect()
    }
}

/// One storage key per file, in order.
///
/// A file whose key is already taken in this batch is stored under
/// `<field_name>_<n>_<file_name>` with the smallest free `n >= 2`.
fn distinct_keys(submission_id: Uuid, files: &[FileUpload]) -> Vec<String> {
    let mut taken = HashSet::with_capacity(files.len());

    files
        .iter()
        .map(|file| {
            let mut key = storage_key(submission_id, &file.field_name, &file.file_name);
            let mut n = 2;
            while taken.contains(&key) {
                let renamed = format!("{n}_{}", file.file_name);
                key = storage_key(submission_id, &file.field_name, &renamed);
                n += 1;
            }
            taken.insert(key.clone());
            key
        })
        .collect()
}
