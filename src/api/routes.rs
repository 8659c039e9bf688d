//! API route configuration.

use crate::api::handlers::{generate_qr_handler, health_handler};
use crate::api::middleware::rate_limit;
use crate::config::RateLimitConfig;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Generation route, optionally behind the per-IP rate limiter.
///
/// # Endpoints
///
/// - `POST /generate-qr` - Generate a PDF of QR codes
pub fn generate_routes(rate_limit: Option<&RateLimitConfig>) -> Router<AppState> {
    let router = Router::new().route("/generate-qr", post(generate_qr_handler));

    match rate_limit {
        Some(limits) => router.layer(rate_limit::layer(limits)),
        None => router,
    }
}

/// Public routes without rate limiting.
///
/// # Endpoints
///
/// - `GET /health` - Liveness check
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
