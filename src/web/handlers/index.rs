//! Generator form page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::domain::entities::{Category, MAX_CODE_COUNT, MIN_CODE_COUNT};

/// Template for the generator form.
///
/// Renders `templates/index.html` with:
/// - Code count input (bounded to the accepted range)
/// - Category select listing every [`Category`] label
/// - Color picker
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub categories: &'static [Category],
    pub min_count: usize,
    pub max_count: usize,
}

/// Renders the generator form.
///
/// # Endpoint
///
/// `GET /`
///
/// The form posts to `/generate-qr`.
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {
        categories: &Category::ALL,
        min_count: MIN_CODE_COUNT,
        max_count: MAX_CODE_COUNT,
    }
}
