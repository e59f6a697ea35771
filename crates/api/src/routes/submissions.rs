//! Registration intake routes.
//!
//! The form posts `multipart/form-data` with a JSON `data` field and any
//! number of `file_*` parts. Browsers preflight with `OPTIONS`.

use axum::{
    Json, Router,
    extract::{Multipart, State, multipart::MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::AppState;
use ficha_core::attachment::FileUpload;
use ficha_core::registration::Submission;
use ficha_core::submission::{
    SubmissionError, SubmissionIntake, SubmissionReceipt, SubmissionRequest,
};

/// Path the hosted form posts to.
pub const FUNCTION_PATH: &str = "/functions/v1/submit-registration-form";
/// Versioned alias of [`FUNCTION_PATH`].
pub const API_PATH: &str = "/api/v1/registrations";

/// Multipart field holding the form JSON.
const DATA_FIELD: &str = "data";
/// Prefix of multipart fields holding files.
const FILE_FIELD_PREFIX: &str = "file_";
/// Message returned on success.
const SUCCESS_MESSAGE: &str = "Ficha cadastral enviada com sucesso!";

/// Creates the intake routes.
pub fn routes<P: SubmissionIntake>() -> Router<AppState<P>> {
    Router::new()
        .route(FUNCTION_PATH, post(submit_handler::<P>).options(preflight))
        .route(API_PATH, post(submit_handler::<P>).options(preflight))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Body of every intake response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    /// Whether the submission was stored.
    pub success: bool,
    /// Id of the stored submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<Uuid>,
    /// Confirmation shown to the submitter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Failure reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    fn accepted(submission_id: Uuid) -> Self {
        Self {
            success: true,
            submission_id: Some(submission_id),
            message: Some(SUCCESS_MESSAGE.to_string()),
            error: None,
        }
    }

    fn failed(err: &SubmissionError) -> Self {
        Self {
            success: false,
            submission_id: None,
            message: None,
            error: Some(err.to_string()),
        }
    }
}

/// Body forwarded to the outbound webhook.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WebhookPayload {
    submission_id: Uuid,
    record: Submission,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// `OPTIONS` preflight. CORS headers are added by the router.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// POST `/functions/v1/submit-registration-form`
pub(crate) async fn submit_handler<P: SubmissionIntake>(
    State(state): State<AppState<P>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let outcome = match multipart {
        Ok(multipart) => match read_request(multipart).await {
            Ok(request) => state.intake.submit(request).await,
            Err(e) => Err(e),
        },
        Err(rejection) => Err(SubmissionError::malformed(rejection.body_text())),
    };

    match outcome {
        Ok(receipt) => {
            info!(submission_id = %receipt.submission_id, "Submission accepted");
            forward_to_webhook(&state, &receipt);
            (
                StatusCode::OK,
                Json(SubmitResponse::accepted(receipt.submission_id)),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Submission failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmitResponse::failed(&e)),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Reads the `data` field and every `file_*` part.
///
/// Unknown fields, and `file_*` fields without a file name, are ignored.
async fn read_request(mut multipart: Multipart) -> Result<SubmissionRequest, SubmissionError> {
    let mut request = SubmissionRequest::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| SubmissionError::malformed(e.body_text()))?
    {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };

        if name == DATA_FIELD {
            let text = field
                .text()
                .await
                .map_err(|e| SubmissionError::malformed(e.body_text()))?;
            request.data = Some(text);
        } else if name.starts_with(FILE_FIELD_PREFIX) {
            let Some(file_name) = field.file_name().map(ToString::to_string) else {
                continue;
            };
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let content = field
                .bytes()
                .await
                .map_err(|e| SubmissionError::malformed(e.body_text()))?;

            request.files.push(FileUpload {
                field_name: name,
                file_name,
                content_type,
                content,
            });
        }
    }

    Ok(request)
}

/// Posts the accepted record to the webhook in the background.
fn forward_to_webhook<P>(state: &AppState<P>, receipt: &SubmissionReceipt) {
    let Some(webhook) = state.webhook.clone() else {
        return;
    };

    let payload = WebhookPayload {
        submission_id: receipt.submission_id,
        record: receipt.record.clone(),
    };

    tokio::spawn(async move {
        match webhook.send(&payload).await {
            Ok(_) => info!(submission_id = %payload.submission_id, "Webhook delivered"),
            Err(e) => warn!(
                submission_id = %payload.submission_id,
                error = %e,
                "Webhook delivery failed"
            ),
        }
    });
}

#[cfg(test)]
#[path = "submissions_tests.rs"]
mod tests;
