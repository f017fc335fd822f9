use serde::Serialize;

/// Public connection parameters of the Kaltura video service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KalturaSettings {
    pub domain: String,
    pub resource_domain: String,
    pub rtmp_domain: String,
    pub partner_id: String,
}

impl KalturaSettings {
    /// Build settings from raw values. Missing or blank values are
    /// returned as the list of offending keys.
    pub fn from_parts(
        domain: Option<String>,
        resource_domain: Option<String>,
        rtmp_domain: Option<String>,
        partner_id: Option<String>,
    ) -> Result<Self, Vec<&'static str>> {
        let mut missing = Vec::new();
        let mut require = |key: &'static str, value: Option<String>| match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                missing.push(key);
                String::new()
            }
        };

        let settings = Self {
            domain: require("domain", domain),
            resource_domain: require("resource_domain", resource_domain),
            rtmp_domain: require("rtmp_domain", rtmp_domain),
            partner_id: require("partner_id", partner_id),
        };

        if missing.is_empty() {
            Ok(settings)
        } else {
            Err(missing)
        }
    }
}

/// What `GET /api/v1/services/kaltura` reports.
///
/// Serializes to `{"enabled":false}` when there are no settings, otherwise
/// to `enabled: true` alongside the flattened settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KalturaStatus {
    pub enabled: bool,
    #[serde(flatten)]
    pub settings: Option<KalturaSettings>,
}

impl KalturaStatus {
    pub fn configured(settings: KalturaSettings) -> Self {
        Self {
            enabled: true,
            settings: Some(settings),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            settings: None,
        }
    }
}

impl From<Option<KalturaSettings>> for KalturaStatus {
    fn from(settings: Option<KalturaSettings>) -> Self {
        match settings {
            Some(settings) => Self::configured(settings),
            None => Self::disabled(),
        }
    }
}
