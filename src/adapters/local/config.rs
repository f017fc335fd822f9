use crate::domain::KalturaSettings;
use crate::ports::KalturaConfigSource;
use async_trait::async_trait;

/// Kaltura settings fixed at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticKalturaConfig {
    settings: Option<KalturaSettings>,
}

impl StaticKalturaConfig {
    pub fn new(settings: Option<KalturaSettings>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl KalturaConfigSource for StaticKalturaConfig {
    async fn kaltura_config(&self) -> Option<KalturaSettings> {
        self.settings.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_configured_settings() {
        let settings = KalturaSettings {
            domain: "kaltura.fake.local".to_string(),
            resource_domain: "cdn.kaltura.fake.local".to_string(),
            rtmp_domain: "rtmp-kaltura.fake.local".to_string(),
            partner_id: "420".to_string(),
        };
        let source = StaticKalturaConfig::new(Some(settings.clone()));

        assert_eq!(source.kaltura_config().await, Some(settings.clone()));
        // Every lookup hands out the same settings
        assert_eq!(source.kaltura_config().await, Some(settings));
    }

    #[tokio::test]
    async fn test_default_is_unconfigured() {
        let source = StaticKalturaConfig::default();
        assert_eq!(source.kaltura_config().await, None);
    }
}
