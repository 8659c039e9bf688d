//! HTTP request handlers for API endpoints.

pub mod generate;
pub mod health;

pub use generate::generate_qr_handler;
pub use health::health_handler;
