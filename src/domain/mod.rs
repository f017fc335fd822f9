//! Domain layer - Pure business logic.

pub mod services;
pub mod users;

pub use services::{KalturaSettings, KalturaStatus};
pub use users::User;
