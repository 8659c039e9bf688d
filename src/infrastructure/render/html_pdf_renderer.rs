//! HTML to PDF conversion via `printpdf`'s HTML layout engine.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use printpdf::{Base64OrRaw, GeneratePdfOptions, PdfDocument, PdfSaveOptions};
use regex::{Captures, Regex};
use serde_json::json;

use crate::domain::renderers::PdfRenderer;
use crate::error::AppError;

/// Title written into the generated PDF's metadata.
const DOCUMENT_TITLE: &str = "Dynamic QR Codes";

static DATA_URI_SRC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src="(data:[^"]+)""#).unwrap());

/// Renders body fragments to PDF through `printpdf`.
///
/// The layout engine does not load `data:` URIs. Inline images are moved
/// into the image map passed to `PdfDocument::from_html` and each `src` is
/// replaced by its key, so every `<img>` becomes an XObject on the page.
#[derive(Debug, Clone, Default)]
pub struct HtmlPdfRenderer;

impl HtmlPdfRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Lays out the fragment without serializing it.
    pub fn build_document(&self, html: &str) -> Result<PdfDocument, AppError> {
        let (fragment, images) = extract_images(html);
        let document = wrap_document(&fragment);

        let fonts = BTreeMap::new();
        let options = GeneratePdfOptions::default();
        let mut warnings = Vec::new();

        let doc = PdfDocument::from_html(&document, &images, &fonts, &options, &mut warnings)
            .map_err(|e| {
                AppError::render(
                    "PDF rendering failed",
                    json!({ "stage": "pdf", "reason": e }),
                )
            })?;

        if !warnings.is_empty() {
            tracing::debug!(warnings = warnings.len(), "PDF layout produced warnings");
        }

        Ok(doc)
    }
}

/// Wraps a body fragment into a standalone HTML document.
pub fn wrap_document(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{DOCUMENT_TITLE}</title>\n</head>\n<body>\n{fragment}\n</body>\n</html>\n"
    )
}

/// Replaces every `src="data:..."` with a `qr-<n>` key and collects the
/// URIs under those keys, in document order.
pub fn extract_images(html: &str) -> (String, BTreeMap<String, Base64OrRaw>) {
    let mut images = BTreeMap::new();

    let rewritten = DATA_URI_SRC.replace_all(html, |caps: &Captures| {
        let key = format!("qr-{}", images.len());
        images.insert(key.clone(), Base64OrRaw::B64(caps[1].to_string()));
        format!("src=\"{key}\"")
    });

    (rewritten.into_owned(), images)
}

impl PdfRenderer for HtmlPdfRenderer {
    fn render(&self, html: &str) -> Result<Vec<u8>, AppError> {
        let doc = self.build_document(html)?;

        let mut save_warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut save_warnings);

        tracing::debug!(
            bytes = bytes.len(),
            xobjects = doc.resources.xobjects.map.len(),
            "PDF rendered"
        );

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::assemble_html;
    use crate::domain::entities::{CodeEntry, Color};
    use crate::domain::renderers::QrRenderer;
    use crate::infrastructure::render::SvgQrRenderer;
    use crate::utils::svg::strip_xml_prolog;
    use printpdf::Op;

    fn sheet(values: &[&str]) -> String {
        let qr = SvgQrRenderer::new();
        let entries: Vec<_> = values
            .iter()
            .map(|value| {
                let svg = qr.render_svg(value, Color::new(17, 34, 51)).unwrap();
                CodeEntry::new(value.to_string(), strip_xml_prolog(&svg).to_string())
            })
            .collect();
        assemble_html(&entries).unwrap()
    }

    fn placed_images(doc: &PdfDocument) -> usize {
        doc.pages
            .iter()
            .flat_map(|page| page.ops.iter())
            .filter(|op| matches!(op, Op::UseXobject { .. }))
            .count()
    }

    #[test]
    fn test_wrap_document_declares_utf8() {
        let html = wrap_document("<h5>hello</h5>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.contains("<body>\n<h5>hello</h5>\n</body>"));
    }

    #[test]
    fn test_extract_images_rewrites_sources_in_order() {
        let html = r#"<img src="data:image/svg+xml;base64,AAAA" /><h5>a</h5><img src="data:image/svg+xml;base64,BBBB" />"#;

        let (rewritten, images) = extract_images(html);

        assert_eq!(rewritten, r#"<img src="qr-0" /><h5>a</h5><img src="qr-1" />"#);
        assert_eq!(images.len(), 2);
        assert!(matches!(&images["qr-0"], Base64OrRaw::B64(uri) if uri.ends_with("AAAA")));
        assert!(matches!(&images["qr-1"], Base64OrRaw::B64(uri) if uri.ends_with("BBBB")));
    }

    #[test]
    fn test_extract_images_leaves_plain_sources() {
        let html = r#"<img src="logo" /><h5>data:</h5>"#;

        let (rewritten, images) = extract_images(html);

        assert_eq!(rewritten, html);
        assert!(images.is_empty());
    }

    #[test]
    fn test_render_labels_only() {
        let bytes = HtmlPdfRenderer::new()
            .render("<h5 style=\"margin-bottom: .5rem;\">example.com</h5>")
            .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_every_code_is_placed_as_xobject() {
        let html = sheet(&["first.com", "second.net", "third.org"]);

        let doc = HtmlPdfRenderer::new().build_document(&html).unwrap();

        assert_eq!(doc.resources.xobjects.map.len(), 3);
        assert_eq!(placed_images(&doc), 3);
    }

    #[test]
    fn test_render_sheet_produces_pdf() {
        let html = sheet(&["first.com", "second.net"]);

        let bytes = HtmlPdfRenderer::new().render(&html).unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }
}
