use crate::domain::KalturaStatus;
use crate::ports::KalturaConfigSource;
use std::sync::Arc;
use tracing::debug;

/// Reports which third-party services are configured.
pub struct ServicesService {
    kaltura: Arc<dyn KalturaConfigSource>,
}

impl ServicesService {
    pub fn new(kaltura: Arc<dyn KalturaConfigSource>) -> Self {
        Self { kaltura }
    }

    pub async fn kaltura_status(&self) -> KalturaStatus {
        let status = KalturaStatus::from(self.kaltura.kaltura_config().await);
        debug!(enabled = status.enabled, "Resolved kaltura service status");
        status
    }
}
