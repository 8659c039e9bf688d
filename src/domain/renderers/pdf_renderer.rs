//! Renderer trait for converting an HTML fragment into a PDF document.

use crate::error::AppError;

/// Converts assembled HTML into PDF bytes.
///
/// # Implementations
///
/// - [`crate::infrastructure::render::HtmlPdfRenderer`] - `printpdf` HTML layout
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait PdfRenderer: Send + Sync {
    /// Renders `html` (a body fragment) to a complete PDF file.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Render`] on malformed HTML or an internal
    /// renderer failure. Failures are deterministic; callers do not retry.
    fn render(&self, html: &str) -> Result<Vec<u8>, AppError>;
}
