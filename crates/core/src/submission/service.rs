//! Submission orchestrator.

use std::future::Future;
use std::sync::Arc;

use chrono_tz::Tz;
use tracing::{error, info, warn};

use super::error::SubmissionError;
use super::types::{StoredSubmission, SubmissionReceipt, SubmissionRequest};
use crate::attachment::{AttachmentProcessor, AttachmentRepository};
use crate::notification::{Notification, NotificationRoute, NotificationSink};
use crate::registration::Submission;
use crate::storage::BlobStore;

/// Repository trait for submission records.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait SubmissionRepository: Send + Sync {
    /// Inserts one normalized record and returns its generated identity.
    fn insert(
        &self,
        record: &Submission,
    ) -> impl Future<Output = Result<StoredSubmission, SubmissionError>> + Send;
}

/// Entry point the HTTP layer hands decoded requests to.
pub trait SubmissionIntake: Send + Sync + 'static {
    /// Runs one submission end to end.
    fn submit(
        &self,
        request: SubmissionRequest,
    ) -> impl Future<Output = Result<SubmissionReceipt, SubmissionError>> + Send;
}

/// Injected settings of the pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Notification sender and recipients.
    pub route: NotificationRoute,
    /// Time zone of the notification timestamp.
    pub timezone: Tz,
}

/// Mapper, store, attachments, notification; in that order.
pub struct SubmissionPipeline<S, A, B, N>
where
    S: SubmissionRepository,
    A: AttachmentRepository,
    B: BlobStore,
    N: NotificationSink,
{
    submissions: Arc<S>,
    attachments: AttachmentProcessor<A, B>,
    sink: Arc<N>,
    config: PipelineConfig,
}

impl<S, A, B, N> SubmissionPipeline<S, A, B, N>
where
    S: SubmissionRepository,
    A: AttachmentRepository,
    B: BlobStore,
    N: NotificationSink,
{
    /// Create a new pipeline.
    #[must_use]
    pub fn new(
        submissions: Arc<S>,
        attachments: AttachmentProcessor<A, B>,
        sink: Arc<N>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            submissions,
            attachments,
            sink,
            config,
        }
    }

    /// Runs one submission.
    ///
    /// Only decoding and the record insert can fail the request. Attachment
    /// and notification failures are logged and the submission still succeeds.
    pub async fn run(
        &self,
        request: SubmissionRequest,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let raw = request
            .data
            .ok_or_else(|| SubmissionError::malformed("missing `data` field"))?;

        let record = Submission::parse(&raw).inspect_err(|e| {
            warn!(error = %e, "Submission rejected");
        })?;

        let stored = self.submissions.insert(&record).await.inspect_err(|e| {
            error!(company = %record.company.name, error = %e, "Failed to store submission");
        })?;

        info!(
            submission_id = %stored.id,
            company = %record.company.name,
            files = request.files.len(),
            "Submission stored"
        );

        let attachment_links = self
            .attachments
            .process_all(stored.id, request.files)
            .await;

        let submitted_at = stored.created_at.with_timezone(&self.config.timezone);
        let notification = Notification::render(&record, &attachment_links, submitted_at);

        let notified = match self.sink.send(&self.config.route, &notification).await {
            Ok(()) => {
                info!(
                    submission_id = %stored.id,
                    recipients = self.config.route.to.len(),
                    "Notification sent"
                );
                true
            }
            Err(e) => {
                error!(submission_id = %stored.id, error = %e, "Notification failed");
                false
            }
        };

        Ok(SubmissionReceipt {
            submission_id: stored.id,
            record,
            attachment_links,
            notified,
        })
    }
}

impl<S, A, B, N> SubmissionIntake for SubmissionPipeline<S, A, B, N>
where
    S: SubmissionRepository + 'static,
    A: AttachmentRepository + 'static,
    B: BlobStore + 'static,
    N: NotificationSink + 'static,
{
    async fn submit(
        &self,
        request: SubmissionRequest,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        self.run(request).await
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
