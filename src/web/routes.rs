//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::index_handler;
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Generator form
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(index_handler))
}
