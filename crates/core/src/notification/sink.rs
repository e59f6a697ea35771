//! Delivery of rendered notifications.

use std::future::Future;

use ficha_shared::{EmailMessage, EmailService, NotificationConfig};

use super::error::NotificationError;
use super::render::Notification;

/// Sender and recipients of the back-office notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRoute {
    /// `Name <address>` sender.
    pub from: String,
    /// Recipient addresses.
    pub to: Vec<String>,
}

impl From<&NotificationConfig> for NotificationRoute {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            from: config.sender(),
            to: config.recipients.clone(),
        }
    }
}

/// Outbound channel for notifications.
pub trait NotificationSink: Send + Sync {
    /// Delivers `notification` along `route`.
    fn send(
        &self,
        route: &NotificationRoute,
        notification: &Notification,
    ) -> impl Future<Output = Result<(), NotificationError>> + Send;
}

impl NotificationSink for EmailService {
    async fn send(
        &self,
        route: &NotificationRoute,
        notification: &Notification,
    ) -> Result<(), NotificationError> {
        let message = EmailMessage {
            from: route.from.clone(),
            to: route.to.clone(),
            subject: notification.subject.clone(),
            html: notification.html(),
            text: notification.text(),
        };

        EmailService::send(self, &message).await?;
        Ok(())
    }
}
