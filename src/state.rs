//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::BatchGenerator;
use crate::domain::renderers::{PdfRenderer, QrRenderer};
use crate::infrastructure::render::{HtmlPdfRenderer, SvgQrRenderer};

/// Read-only state shared by all requests.
///
/// Holds no per-request data; every batch builds its own RNG and document.
#[derive(Clone)]
pub struct AppState {
    pub batch_generator: Arc<BatchGenerator>,
}

impl AppState {
    pub fn new(batch_generator: BatchGenerator) -> Self {
        Self {
            batch_generator: Arc::new(batch_generator),
        }
    }

    /// State wired to the given renderers.
    pub fn with_renderers(
        qr_renderer: Arc<dyn QrRenderer>,
        pdf_renderer: Arc<dyn PdfRenderer>,
    ) -> Self {
        Self::new(BatchGenerator::new(qr_renderer, pdf_renderer))
    }
}

impl Default for AppState {
    /// Production wiring: `qrcode` SVG output, `printpdf` HTML layout.
    fn default() -> Self {
        Self::with_renderers(Arc::new(SvgQrRenderer::new()), Arc::new(HtmlPdfRenderer::new()))
    }
}
