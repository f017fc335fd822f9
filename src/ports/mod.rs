//! Ports - Trait seams between the application and its adapters.

pub mod auth;
pub mod services;

pub use auth::Authenticator;
pub use services::KalturaConfigSource;
