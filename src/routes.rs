//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Generator form (HTML)
//! - `POST /generate-qr` - PDF generation (rate limited per IP)
//! - `GET  /health`      - Liveness check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the generation endpoint
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::config::RateLimitConfig;
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
///
/// Pass `None` for `rate_limit` when the router is not served with
/// peer address connect info (e.g. in tests).
pub fn router(state: AppState, rate_limit: Option<&RateLimitConfig>) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .merge(api::routes::public_routes())
        .merge(api::routes::generate_routes(rate_limit))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with trailing-slash normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - token bucket for `POST /generate-qr`, or `None` to disable
pub fn app_router(state: AppState, rate_limit: Option<&RateLimitConfig>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, rate_limit))
}
