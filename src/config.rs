//! Configuration loaded from the environment.

use crate::domain::KalturaSettings;
use std::collections::HashSet;
use std::env;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An `API_ACCESS_TOKENS` entry without a `token:user_id` separator.
    /// Carries the entry's position, never the entry itself.
    #[error("API_ACCESS_TOKENS entry {0} is not a token:user_id pair")]
    MalformedAccessToken(usize),
    /// An `API_ACCESS_TOKENS` entry repeating an earlier entry's token.
    #[error("API_ACCESS_TOKENS entry {0} repeats an earlier token")]
    DuplicateAccessToken(usize),
    /// `KALTURA_ENABLED` set to something other than `true` or `false`.
    #[error("KALTURA_ENABLED must be true or false, got {0:?}")]
    InvalidKalturaEnabled(String),
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// HTTP server bind address
    pub addr: String,
    /// HTTP server port
    pub port: String,
    /// Access token to user id pairs accepted by the API
    pub access_tokens: Vec<(String, String)>,
    /// Kaltura settings; `None` when disabled or not fully configured
    pub kaltura: Option<KalturaSettings>,
}

impl ServerConfig {
    /// Load configuration from environment variables, after `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_tokens = match lookup("API_ACCESS_TOKENS") {
            Some(raw) => parse_access_tokens(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            addr: lookup("ADDR").unwrap_or_else(|| String::from("127.0.0.1")),
            port: lookup("PORT").unwrap_or_else(|| String::from("3000")),
            access_tokens,
            kaltura: kaltura_from_lookup(&lookup)?,
        })
    }
}

fn parse_access_tokens(raw: &str) -> Result<Vec<(String, String)>, ConfigError> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .enumerate()
        .map(|(index, entry)| match entry.split_once(':') {
            Some((token, user_id)) if !token.is_empty() && !user_id.is_empty() => {
                if !seen.insert(token) {
                    return Err(ConfigError::DuplicateAccessToken(index));
                }
                Ok((token.to_string(), user_id.to_string()))
            }
            _ => Err(ConfigError::MalformedAccessToken(index)),
        })
        .collect()
}

fn kaltura_enabled(raw: Option<String>) -> Result<bool, ConfigError> {
    match raw {
        None => Ok(true),
        Some(value) if value.trim().eq_ignore_ascii_case("true") => Ok(true),
        Some(value) if value.trim().eq_ignore_ascii_case("false") => Ok(false),
        Some(value) => Err(ConfigError::InvalidKalturaEnabled(value)),
    }
}

fn kaltura_from_lookup<F>(lookup: &F) -> Result<Option<KalturaSettings>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if !kaltura_enabled(lookup("KALTURA_ENABLED"))? {
        return Ok(None);
    }

    let domain = lookup("KALTURA_DOMAIN");
    let resource_domain = lookup("KALTURA_RESOURCE_DOMAIN");
    let rtmp_domain = lookup("KALTURA_RTMP_DOMAIN");
    let partner_id = lookup("KALTURA_PARTNER_ID");

    // Nothing set at all is the plain "not configured" case
    if domain.is_none() && resource_domain.is_none() && rtmp_domain.is_none() && partner_id.is_none()
    {
        return Ok(None);
    }

    match KalturaSettings::from_parts(domain, resource_domain, rtmp_domain, partner_id) {
        Ok(settings) => Ok(Some(settings)),
        Err(missing) => {
            warn!(?missing, "Kaltura is partially configured, treating it as disabled");
            Ok(None)
        }
    }
}
