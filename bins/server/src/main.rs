//! Ficha API Server
//!
//! Main entry point for the registration intake service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ficha_api::{AppState, create_router};
use ficha_core::attachment::AttachmentProcessor;
use ficha_core::notification::NotificationRoute;
use ficha_core::storage::{StorageConfig, StorageService};
use ficha_core::submission::{PipelineConfig, SubmissionPipeline};
use ficha_db::{AttachmentRepository, SubmissionRepository, connect_with};
use ficha_shared::{AppConfig, EmailService, WebhookClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ficha=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Connect to database
    let db = connect_with(&config.database).await?;
    info!("Connected to database");

    // Create storage service
    let storage = StorageService::from_config(StorageConfig::from(&config.storage))?;
    info!(
        provider = storage.provider_name(),
        bucket = storage.bucket(),
        "Storage configured"
    );

    // Create email service
    let email_service = EmailService::new(config.email.clone());
    info!(
        smtp_host = %config.email.smtp_host,
        smtp_port = %config.email.smtp_port,
        recipients = ?config.notification.recipients,
        "Email service configured"
    );

    // Assemble the submission pipeline
    let pipeline = SubmissionPipeline::new(
        Arc::new(SubmissionRepository::new(db.clone())),
        AttachmentProcessor::new(
            Arc::new(AttachmentRepository::new(db)),
            Arc::new(storage),
        ),
        Arc::new(email_service),
        PipelineConfig {
            route: NotificationRoute::from(&config.notification),
            timezone: config.notification.tz()?,
        },
    );

    let webhook = WebhookClient::new(&config.webhook)?;
    if webhook.is_configured() {
        info!("Webhook forwarding enabled");
    } else {
        warn!("Webhook URL not set, forwarding disabled");
    }

    // Create router
    let state = AppState::new(Arc::new(pipeline)).with_webhook(webhook);
    let app = create_router(state, config.server.max_body_bytes);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
