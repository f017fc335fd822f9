use crate::domain::KalturaSettings;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KalturaConfigSource: Send + Sync {
    /// Current Kaltura settings.
    /// `None` when the integration is disabled or not configured.
    async fn kaltura_config(&self) -> Option<KalturaSettings>;
}
