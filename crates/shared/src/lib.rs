//! Shared configuration and outbound clients for Ficha.
//!
//! This crate provides the pieces used by every other crate:
//! - Layered configuration (files + `FICHA__*` environment)
//! - SMTP email delivery
//! - Outbound JSON webhook client

pub mod config;
pub mod email;
pub mod webhook;

pub use config::{
    AppConfig, DatabaseConfig, EmailConfig, NotificationConfig, ServerConfig, StorageProvider,
    StorageSettings, WebhookConfig,
};
pub use email::{EmailError, EmailMessage, EmailService};
pub use webhook::{WebhookClient, WebhookError};
