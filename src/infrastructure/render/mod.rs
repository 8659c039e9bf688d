//! Renderer implementations backed by third-party crates.
//!
//! - [`SvgQrRenderer`] - `qrcode` SVG backend
//! - [`HtmlPdfRenderer`] - `printpdf` HTML layout

mod html_pdf_renderer;
mod svg_qr_renderer;

pub use html_pdf_renderer::HtmlPdfRenderer;
pub use svg_qr_renderer::SvgQrRenderer;
