//! DTOs for the QR batch generation endpoint.

use serde::Deserialize;
use serde_json::json;
use validator::{Validate, ValidationError};

use crate::domain::entities::{
    Category, Color, GenerationRequest, MAX_CODE_COUNT, MIN_CODE_COUNT,
};
use crate::error::AppError;

/// Raw form submission of `POST /generate-qr`.
///
/// Every field defaults to an empty string when absent so that missing
/// fields are reported through validation rather than as a body rejection.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct GenerateQrForm {
    /// Number of codes, integer string in `1..=100`.
    #[serde(rename = "code-count", default)]
    #[validate(custom(function = "validate_code_count"))]
    pub code_count: String,

    /// Category key, e.g. `WEBSITE_URL`.
    #[serde(default)]
    #[validate(custom(function = "validate_prefix"))]
    pub prefix: String,

    /// Dark module color, `#RRGGBB`.
    #[serde(default)]
    #[validate(custom(function = "validate_color"))]
    pub color: String,
}

fn field_error(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn missing_field() -> ValidationError {
    field_error("missing_field", "This field is required".to_string())
}

fn parse_code_count(value: &str) -> Option<usize> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|count| (MIN_CODE_COUNT..=MAX_CODE_COUNT).contains(count))
}

fn validate_code_count(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(missing_field());
    }

    parse_code_count(value).map(|_| ()).ok_or_else(|| {
        field_error(
            "range",
            format!("Must be an integer between {MIN_CODE_COUNT} and {MAX_CODE_COUNT}"),
        )
    })
}

fn validate_prefix(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(missing_field());
    }

    value.parse::<Category>().map(|_| ()).map_err(|_| {
        let keys: Vec<_> = Category::ALL.iter().map(|c| c.key()).collect();
        field_error("unknown_category", format!("Must be one of: {}", keys.join(", ")))
    })
}

fn validate_color(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(missing_field());
    }

    Color::parse_hex(value)
        .map(|_| ())
        .map_err(|e| field_error("malformed_color", e.to_string()))
}

impl TryFrom<GenerateQrForm> for GenerationRequest {
    type Error = AppError;

    /// Validates every field, reporting all failures at once.
    fn try_from(form: GenerateQrForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let invalid = || {
            AppError::internal(
                "Validated form could not be converted",
                json!({ "prefix": form.prefix, "code-count": form.code_count, "color": form.color }),
            )
        };

        let count = parse_code_count(&form.code_count).ok_or_else(invalid)?;
        let category = form.prefix.parse::<Category>().map_err(|_| invalid())?;
        let color = Color::parse_hex(&form.color).map_err(|_| invalid())?;

        GenerationRequest::new(category, count, color).ok_or_else(invalid)
    }
}
