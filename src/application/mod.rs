//! Application layer - Services that use ports.

pub mod services;

pub use services::ServicesService;
