//! Services API - Third-party service configuration probe
//!
//! Hexagonal Architecture:
//! - domain/: Pure business logic (service settings, users)
//! - ports/: Trait definitions
//! - adapters/: Concrete implementations
//! - application/: Generic services
//! - http/: axum inbound adapter
//! - config: Environment configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod http;
pub mod ports;

// Re-exports for convenience
pub use config::ServerConfig;
pub use http::{create_router, AppState};
