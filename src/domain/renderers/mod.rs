//! Renderer trait definitions for the domain layer.
//!
//! The QR and PDF engines are third-party libraries treated as pure
//! functions. These traits are the seams between them and the batch
//! pipeline; implementations live in `crate::infrastructure::render`.
//!
//! - [`QrRenderer`] - text + color → SVG markup
//! - [`PdfRenderer`] - HTML → PDF bytes
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod pdf_renderer;
pub mod qr_renderer;

pub use pdf_renderer::PdfRenderer;
pub use qr_renderer::QrRenderer;

#[cfg(test)]
pub use pdf_renderer::MockPdfRenderer;
#[cfg(test)]
pub use qr_renderer::MockQrRenderer;
