//! Local adapters backed by process configuration.

pub mod config;
pub mod tokens;

pub use config::StaticKalturaConfig;
pub use tokens::StaticTokenAuthenticator;
