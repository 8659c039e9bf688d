//! Handler for QR batch generation endpoint.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::header,
    response::{IntoResponse, Response},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use crate::api::dto::generate::GenerateQrForm;
use crate::domain::entities::GenerationRequest;
use crate::error::AppError;
use crate::state::AppState;

/// File name offered to the browser for the generated document.
pub const PDF_FILE_NAME: &str = "Dynamic QR Codes.pdf";

/// Generates a PDF sheet of QR codes for fake sample data.
///
/// # Endpoint
///
/// `POST /generate-qr`
///
/// # Request Body
///
/// `application/x-www-form-urlencoded`:
///
/// ```text
/// code-count=3&prefix=WEBSITE_URL&color=%23112233
/// ```
///
/// # Response
///
/// `200 OK` with `Content-Type: application/pdf` and
/// `Content-Disposition: attachment; filename="Dynamic QR Codes.pdf"`.
///
/// # Errors
///
/// - **422 Unprocessable Entity**: validation failure (all failing fields listed),
///   a body that is not a decodable form, or sample generation exhausted
/// - **500 Internal Server Error**: QR or PDF rendering failure
///
/// The pipeline is CPU bound and runs on the blocking thread pool.
pub async fn generate_qr_handler(
    State(state): State<AppState>,
    form: Result<Form<GenerateQrForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;
    let request = GenerationRequest::try_from(form)?;
    let generator = state.batch_generator.clone();

    let bytes = tokio::task::spawn_blocking(move || {
        let mut rng = StdRng::from_os_rng();
        generator.render_pdf(&request, &mut rng)
    })
    .await
    .map_err(|e| {
        AppError::internal(
            "Generation task failed",
            json!({ "reason": e.to_string() }),
        )
    })??;

    Ok(pdf_attachment(bytes))
}

/// Wraps PDF bytes as a download response.
pub fn pdf_attachment(bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{PDF_FILE_NAME}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_pdf_attachment_headers() {
        let response = pdf_attachment(b"%PDF-1.7".to_vec());

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Dynamic QR Codes.pdf\""
        );
    }
}
