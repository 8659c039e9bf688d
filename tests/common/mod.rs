#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use qr_batch::AppError;
use qr_batch::domain::renderers::PdfRenderer;
use qr_batch::infrastructure::render::SvgQrRenderer;
use qr_batch::routes::router;
use qr_batch::state::AppState;
use std::sync::{Arc, Mutex};

pub const STUB_PDF: &[u8] = b"%PDF-1.4\n% stub\n";

/// PDF renderer that records the HTML it receives and returns fixed bytes.
#[derive(Default)]
pub struct RecordingPdfRenderer {
    pub calls: Mutex<Vec<String>>,
}

impl RecordingPdfRenderer {
    pub fn last_html(&self) -> Option<String> {
        self.calls.lock().unwrap().last().cloned()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl PdfRenderer for RecordingPdfRenderer {
    fn render(&self, html: &str) -> Result<Vec<u8>, AppError> {
        self.calls.lock().unwrap().push(html.to_string());
        Ok(STUB_PDF.to_vec())
    }
}

/// State with the real QR renderer and a recording PDF renderer.
pub fn create_test_state() -> (AppState, Arc<RecordingPdfRenderer>) {
    let pdf = Arc::new(RecordingPdfRenderer::default());
    let state = AppState::with_renderers(Arc::new(SvgQrRenderer::new()), pdf.clone());
    (state, pdf)
}

pub fn create_test_app() -> (Router, Arc<RecordingPdfRenderer>) {
    let (state, pdf) = create_test_state();
    (router(state, None), pdf)
}

pub fn create_test_server() -> (TestServer, Arc<RecordingPdfRenderer>) {
    let (app, pdf) = create_test_app();
    (TestServer::new(app).unwrap(), pdf)
}

/// Server on the production renderers.
pub fn create_pdf_server() -> TestServer {
    TestServer::new(router(AppState::default(), None)).unwrap()
}

/// Number of form XObjects, i.e. embedded vector images, in a PDF file.
pub fn pdf_form_xobjects(bytes: &[u8]) -> usize {
    let pattern = regex::bytes::Regex::new(r"/Subtype\s*/Form\b").unwrap();
    pattern.find_iter(bytes).count()
}

/// Form body as a sequence of owned pairs.
pub fn form(fields: &[(&str, &str)]) -> Vec<(String, String)> {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Decodes every base64 data URI image in `html`, in document order.
pub fn embedded_images(html: &str) -> Vec<String> {
    html.split("base64,")
        .skip(1)
        .map(|rest| {
            let end = rest.find('"').expect("unterminated src attribute");
            let bytes = STANDARD.decode(&rest[..end]).expect("invalid base64");
            String::from_utf8(bytes).expect("image is not utf-8")
        })
        .collect()
}

/// Text of every `<h5>` label in `html`, in document order.
pub fn labels(html: &str) -> Vec<String> {
    html.split("<h5")
        .skip(1)
        .map(|rest| {
            let start = rest.find('>').expect("unterminated h5 tag") + 1;
            let end = rest.find("</h5>").expect("unclosed h5");
            rest[start..end].to_string()
        })
        .collect()
}
