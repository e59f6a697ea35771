//! Storage configuration types.

use ficha_shared::{StorageProvider, StorageSettings};

/// Storage service configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage provider configuration.
    pub provider: StorageProvider,
    /// Signed download URL TTL in seconds (default: 604800 = 7 days).
    pub signed_url_ttl_secs: u64,
}

impl StorageConfig {
    /// Default signed URL TTL: 7 days.
    pub const DEFAULT_SIGNED_URL_TTL: u64 = 7 * 24 * 3600;

    /// Create a new storage config with default settings.
    #[must_use]
    pub fn new(provider: StorageProvider) -> Self {
        Self {
            provider,
            signed_url_ttl_secs: Self::DEFAULT_SIGNED_URL_TTL,
        }
    }

    /// Set signed URL TTL.
    #[must_use]
    pub fn with_signed_url_ttl(mut self, secs: u64) -> Self {
        self.signed_url_ttl_secs = secs;
        self
    }
}

impl From<&StorageSettings> for StorageConfig {
    fn from(settings: &StorageSettings) -> Self {
        Self::new(settings.provider.clone()).with_signed_url_ttl(settings.signed_url_ttl_secs)
    }
}
