//! Application error type and its HTTP representation.
//!
//! Every failure in the generation pipeline aborts the whole request and is
//! reported to the caller as a JSON envelope:
//!
//! ```json
//! {
//!   "error": {
//!     "code": "validation_error",
//!     "message": "Request validation failed",
//!     "details": { "color": [{ "code": "malformed_color", "message": "..." }] }
//!   }
//! }
//! ```

use axum::{
    Json,
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::entities::Category;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload shared by all error responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// One or more request fields failed validation. Generation never started.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The sample generator could not produce enough distinct values.
    #[error("unable to generate {requested} unique {category} samples (produced {produced})")]
    GenerationExhausted {
        category: Category,
        requested: usize,
        produced: usize,
    },

    /// The QR or PDF renderer failed.
    #[error("{message}")]
    Render { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn render(message: impl Into<String>, details: Value) -> Self {
        Self::Render {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status the error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::GenerationExhausted { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Render { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { message, details } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::GenerationExhausted {
                category,
                requested,
                produced,
            } => ErrorInfo {
                code: "generation_exhausted",
                message: self.to_string(),
                details: json!({
                    "prefix": category.key(),
                    "requested": requested,
                    "produced": produced,
                }),
            },
            AppError::Render { message, details } => ErrorInfo {
                code: "render_error",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Internal { message, details } => ErrorInfo {
                code: "internal_error",
                message: message.clone(),
                details: details.clone(),
            },
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Map::new();

        for (field, field_errors) in errors.field_errors() {
            let entries: Vec<Value> = field_errors
                .iter()
                .map(|e| {
                    json!({
                        "code": e.code,
                        "message": e.message.as_deref().unwrap_or_default(),
                    })
                })
                .collect();
            fields.insert(field.to_string(), Value::Array(entries));
        }

        AppError::validation("Request validation failed", Value::Object(fields))
    }
}

/// Undecodable form bodies are reported like field failures, under `body`.
impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::validation(
            "Request validation failed",
            json!({
                "body": [{
                    "code": "malformed_body",
                    "message": rejection.body_text(),
                }]
            }),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
