//! HTML assembly of a generated document.

use askama::Template;
use serde_json::json;

use crate::domain::entities::{CodeEntry, IMAGE_MIME_TYPE};
use crate::error::AppError;

/// Template for the PDF body.
///
/// Renders `templates/code_sheet.html`: each entry becomes a 100x100
/// base64-embedded SVG image followed by an `<h5>` label with the sample
/// value. Labels are HTML-escaped by askama.
#[derive(Template)]
#[template(path = "code_sheet.html")]
pub struct CodeSheetTemplate<'a> {
    pub entries: &'a [CodeEntry],
    pub mime_type: &'a str,
}

/// Builds the HTML fragment listing every entry in order.
///
/// # Errors
///
/// Returns [`AppError::Render`] if template rendering fails.
pub fn assemble_html(entries: &[CodeEntry]) -> Result<String, AppError> {
    CodeSheetTemplate {
        entries,
        mime_type: IMAGE_MIME_TYPE,
    }
    .render()
    .map_err(|e| {
        AppError::render(
            "HTML assembly failed",
            json!({ "stage": "html", "reason": e.to_string() }),
        )
    })
}
