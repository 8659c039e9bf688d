//! Batch generation pipeline: samples → QR codes → HTML → PDF.

use std::collections::HashSet;
use std::sync::Arc;

use rand::rngs::StdRng;

use crate::application::services::document_assembler::assemble_html;
use crate::domain::entities::{CodeEntry, Document, GenerationRequest};
use crate::domain::renderers::{PdfRenderer, QrRenderer};
use crate::error::AppError;
use crate::utils::sample_data::sampler;
use crate::utils::svg::strip_xml_prolog;

/// Maximum draws spent looking for one new distinct sample before the
/// batch is abandoned.
pub const MAX_ATTEMPTS_PER_SAMPLE: usize = 1_000;

/// Service producing QR code documents for validated requests.
///
/// Holds the renderer seams only; all per-request state (RNG, seen samples,
/// entries) lives on the stack of a single call.
#[derive(Clone)]
pub struct BatchGenerator {
    qr_renderer: Arc<dyn QrRenderer>,
    pdf_renderer: Arc<dyn PdfRenderer>,
}

impl BatchGenerator {
    /// Creates a new batch generator.
    pub fn new(qr_renderer: Arc<dyn QrRenderer>, pdf_renderer: Arc<dyn PdfRenderer>) -> Self {
        Self {
            qr_renderer,
            pdf_renderer,
        }
    }

    /// Generates `request.count()` entries with distinct sample values.
    ///
    /// Samples come from the category's generator in
    /// [`crate::utils::sample_data`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::GenerationExhausted`] if a new distinct sample
    /// cannot be found within [`MAX_ATTEMPTS_PER_SAMPLE`] draws, or
    /// [`AppError::Render`] if the QR renderer fails.
    pub fn generate(
        &self,
        request: &GenerationRequest,
        rng: &mut StdRng,
    ) -> Result<Document, AppError> {
        self.generate_with(request, sampler(request.category()), rng)
    }

    /// Same as [`Self::generate`], drawing samples from `sample` instead of
    /// the category's default generator.
    pub fn generate_with<R, F>(
        &self,
        request: &GenerationRequest,
        mut sample: F,
        rng: &mut R,
    ) -> Result<Document, AppError>
    where
        F: FnMut(&mut R) -> String,
    {
        let category = request.category();
        let count = request.count();
        let color = request.color();

        tracing::info!(%category, count, %color, "Generating QR batch");

        let mut seen = HashSet::with_capacity(count);
        let mut entries = Vec::with_capacity(count);

        while entries.len() < count {
            let data = draw_unique(&mut seen, &mut sample, rng).ok_or_else(|| {
                AppError::GenerationExhausted {
                    category,
                    requested: count,
                    produced: entries.len(),
                }
            })?;

            let svg = self
                .qr_renderer
                .render_svg(&category.qr_payload(&data), color)?;

            entries.push(CodeEntry::new(data, strip_xml_prolog(&svg).to_string()));
        }

        metrics::counter!("qr_codes_generated_total", "category" => category.key())
            .increment(entries.len() as u64);

        Ok(entries)
    }

    /// Runs the whole pipeline and returns the PDF bytes.
    ///
    /// # Errors
    ///
    /// Propagates generation and rendering errors; no partial document is
    /// ever returned.
    pub fn render_pdf(
        &self,
        request: &GenerationRequest,
        rng: &mut StdRng,
    ) -> Result<Vec<u8>, AppError> {
        let document = self.generate(request, rng)?;
        self.render_document(&document)
    }

    /// Assembles an already generated document and renders it to PDF.
    pub fn render_document(&self, document: &[CodeEntry]) -> Result<Vec<u8>, AppError> {
        let html = assemble_html(document)?;
        let bytes = self.pdf_renderer.render(&html)?;

        metrics::counter!("pdf_documents_rendered_total").increment(1);
        tracing::info!(entries = document.len(), bytes = bytes.len(), "PDF document rendered");

        Ok(bytes)
    }
}

/// Draws samples until one not in `seen` appears, recording it.
///
/// Returns `None` after [`MAX_ATTEMPTS_PER_SAMPLE`] consecutive duplicates.
fn draw_unique<R, F>(seen: &mut HashSet<String>, sample: &mut F, rng: &mut R) -> Option<String>
where
    F: FnMut(&mut R) -> String,
{
    for _ in 0..MAX_ATTEMPTS_PER_SAMPLE {
        let value = sample(rng);
        if seen.insert(value.clone()) {
            return Some(value);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Category, Color};
    use crate::domain::renderers::{MockPdfRenderer, MockQrRenderer};
    use mockall::predicate::*;
    use rand::SeedableRng;
    use serde_json::json;

    fn fake_qr() -> MockQrRenderer {
        let mut qr = MockQrRenderer::new();
        qr.expect_render_svg().returning(|payload, color| {
            Ok(format!(
                "<?xml version=\"1.0\" standalone=\"yes\"?><svg fill=\"{}\">{}</svg>",
                color.to_hex(),
                payload
            ))
        });
        qr
    }

    fn generator(qr: MockQrRenderer, pdf: MockPdfRenderer) -> BatchGenerator {
        BatchGenerator::new(Arc::new(qr), Arc::new(pdf))
    }

    fn request(category: Category, count: usize, color: Color) -> GenerationRequest {
        GenerationRequest::new(category, count, color).unwrap()
    }

    #[test]
    fn test_generate_produces_requested_count() {
        let service = generator(fake_qr(), MockPdfRenderer::new());
        let mut rng = StdRng::seed_from_u64(1);

        for category in Category::ALL {
            let document = service
                .generate(&request(category, 25, Color::BLACK), &mut rng)
                .unwrap();
            assert_eq!(document.len(), 25, "{category}");
        }
    }

    #[test]
    fn test_generate_values_are_unique() {
        let service = generator(fake_qr(), MockPdfRenderer::new());
        let mut rng = StdRng::seed_from_u64(2);

        let document = service
            .generate(&request(Category::WebsiteUrl, 100, Color::BLACK), &mut rng)
            .unwrap();

        let distinct: HashSet<_> = document.iter().map(|e| e.data.as_str()).collect();
        assert_eq!(distinct.len(), 100);
    }

    #[test]
    fn test_generate_strips_prolog_and_applies_color() {
        let service = generator(fake_qr(), MockPdfRenderer::new());
        let mut rng = StdRng::seed_from_u64(3);

        let document = service
            .generate(&request(Category::Email, 3, Color::new(17, 34, 51)), &mut rng)
            .unwrap();

        for entry in &document {
            assert!(entry.image.starts_with("<svg"));
            assert!(entry.image.contains("#112233"));
            assert!(!entry.image.contains("<?xml"));
        }
    }

    #[test]
    fn test_phone_payload_is_tel_uri() {
        let mut qr = MockQrRenderer::new();
        qr.expect_render_svg()
            .withf(|payload, _| payload.starts_with("tel:"))
            .times(2)
            .returning(|_, _| Ok("<svg/>".to_string()));

        let service = generator(qr, MockPdfRenderer::new());
        let mut rng = StdRng::seed_from_u64(4);

        let document = service
            .generate(&request(Category::PhoneNumber, 2, Color::BLACK), &mut rng)
            .unwrap();

        assert!(document.iter().all(|e| !e.data.starts_with("tel:")));
    }

    #[test]
    fn test_generate_keeps_generation_order() {
        let service = generator(fake_qr(), MockPdfRenderer::new());
        let mut counter = 0;

        let document = service
            .generate_with(
                &request(Category::Sms, 4, Color::BLACK),
                |_: &mut ()| {
                    counter += 1;
                    format!("sample-{counter}")
                },
                &mut (),
            )
            .unwrap();

        let data: Vec<_> = document.iter().map(|e| e.data.as_str()).collect();
        assert_eq!(data, ["sample-1", "sample-2", "sample-3", "sample-4"]);
    }

    #[test]
    fn test_generate_skips_duplicates() {
        let service = generator(fake_qr(), MockPdfRenderer::new());
        let values = ["a.com", "a.com", "b.com", "a.com", "b.com", "c.com"];
        let mut index = 0;

        let document = service
            .generate_with(
                &request(Category::WebsiteUrl, 3, Color::BLACK),
                |_: &mut ()| {
                    let value = values[index].to_string();
                    index += 1;
                    value
                },
                &mut (),
            )
            .unwrap();

        let data: Vec<_> = document.iter().map(|e| e.data.as_str()).collect();
        assert_eq!(data, ["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn test_generate_exhausted_when_value_space_too_small() {
        let service = generator(fake_qr(), MockPdfRenderer::new());
        let mut calls = 0usize;

        let err = service
            .generate_with(
                &request(Category::Sms, 3, Color::BLACK),
                |_: &mut ()| {
                    calls += 1;
                    (if calls % 2 == 0 { "even" } else { "odd" }).to_string()
                },
                &mut (),
            )
            .unwrap_err();

        match err {
            AppError::GenerationExhausted {
                category,
                requested,
                produced,
            } => {
                assert_eq!(category, Category::Sms);
                assert_eq!(requested, 3);
                assert_eq!(produced, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(calls, 2 + MAX_ATTEMPTS_PER_SAMPLE);
    }

    #[test]
    fn test_qr_render_error_aborts_batch() {
        let mut qr = MockQrRenderer::new();
        qr.expect_render_svg()
            .times(1)
            .returning(|_, _| Err(AppError::render("QR code rendering failed", json!({}))));

        let service = generator(qr, MockPdfRenderer::new());
        let mut rng = StdRng::seed_from_u64(5);

        let err = service
            .generate(&request(Category::Email, 5, Color::BLACK), &mut rng)
            .unwrap_err();

        assert!(matches!(err, AppError::Render { .. }));
    }

    #[test]
    fn test_render_pdf_passes_assembled_html() {
        let mut pdf = MockPdfRenderer::new();
        pdf.expect_render()
            .withf(|html: &str| html.matches("<img ").count() == 3 && html.matches("<h5 ").count() == 3)
            .times(1)
            .returning(|_| Ok(b"%PDF-1.7 stub".to_vec()));

        let service = generator(fake_qr(), pdf);
        let mut rng = StdRng::seed_from_u64(6);

        let bytes = service
            .render_pdf(&request(Category::WebsiteUrl, 3, Color::new(17, 34, 51)), &mut rng)
            .unwrap();

        assert_eq!(bytes, b"%PDF-1.7 stub");
    }

    #[test]
    fn test_render_pdf_error_propagates() {
        let mut pdf = MockPdfRenderer::new();
        pdf.expect_render()
            .with(always())
            .returning(|_| Err(AppError::render("PDF rendering failed", json!({ "stage": "pdf" }))));

        let service = generator(fake_qr(), pdf);
        let mut rng = StdRng::seed_from_u64(7);

        let err = service
            .render_pdf(&request(Category::MeCard, 1, Color::BLACK), &mut rng)
            .unwrap_err();

        assert!(matches!(err, AppError::Render { .. }));
    }
}
