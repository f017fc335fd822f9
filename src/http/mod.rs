//! HTTP inbound adapter.
//!
//! JSON API served with axum:
//! - `GET /api/v1/services/kaltura`: Kaltura integration status

pub mod auth;
pub mod error;
mod router;
pub mod services;

pub use auth::CurrentUser;
pub use error::ApiError;
pub use router::{create_router, AppState};
