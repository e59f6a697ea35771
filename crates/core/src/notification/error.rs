//! Notification error types.

use thiserror::Error;

/// Errors raised while delivering a notification.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The message could not be built or delivered.
    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}

impl NotificationError {
    /// Create a delivery error.
    #[must_use]
    pub fn delivery(msg: impl Into<String>) -> Self {
        Self::Delivery(msg.into())
    }
}

impl From<ficha_shared::EmailError> for NotificationError {
    fn from(err: ficha_shared::EmailError) -> Self {
        Self::Delivery(err.to_string())
    }
}
