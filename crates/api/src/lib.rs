//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - The registration intake endpoint and its CORS preflight
//! - Health check routes
//! - Response types

pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, header};
use ficha_core::submission::SubmissionIntake;
use ficha_shared::WebhookClient;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

/// Request headers browsers may send to the intake endpoint.
pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Application state shared across handlers.
pub struct AppState<P> {
    /// Submission pipeline.
    pub intake: Arc<P>,
    /// Outbound webhook, present only when configured.
    pub webhook: Option<Arc<WebhookClient>>,
}

impl<P> AppState<P> {
    /// State without a webhook.
    #[must_use]
    pub fn new(intake: Arc<P>) -> Self {
        Self {
            intake,
            webhook: None,
        }
    }

    /// Forwards accepted submissions to `webhook` when it has a URL.
    #[must_use]
    pub fn with_webhook(mut self, webhook: WebhookClient) -> Self {
        self.webhook = webhook.is_configured().then(|| Arc::new(webhook));
        self
    }
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            intake: Arc::clone(&self.intake),
            webhook: self.webhook.clone(),
        }
    }
}

/// Creates the main application router.
///
/// Every response carries the CORS headers the registration form expects.
/// Bodies over `max_body_bytes` fail while the multipart stream is read, so
/// they get the same JSON failure as any other malformed request.
pub fn create_router<P: SubmissionIntake>(state: AppState<P>, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(routes::submissions::routes::<P>())
        .nest("/api/v1", routes::health::routes())
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
