//! Core domain entities of the batch generator.
//!
//! - [`Category`] - Kind of sample data encoded into the codes
//! - [`Color`] - Validated `#RRGGBB` color for the QR modules
//! - [`GenerationRequest`] - Validated batch input
//! - [`CodeEntry`] / [`Document`] - Generated output
//!
//! All entities live only for the duration of one request.

pub mod category;
pub mod code_entry;
pub mod color;
pub mod generation_request;

pub use category::{Category, UnknownCategory};
pub use code_entry::{CodeEntry, Document, IMAGE_MIME_TYPE};
pub use color::{Color, ColorParseError};
pub use generation_request::{GenerationRequest, MAX_CODE_COUNT, MIN_CODE_COUNT};
