//! # QR Batch
//!
//! Generates sheets of QR codes for fake sample data and serves them as a
//! downloadable PDF, built with Axum.
//!
//! ## Pipeline
//!
//! 1. Validate the form (`code-count`, `prefix`, `color`)
//! 2. Draw `code-count` distinct samples for the category
//! 3. Render each sample as an SVG QR code in the requested color
//! 4. Assemble an HTML page of images and labels
//! 5. Render the page to PDF and return it as an attachment
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and renderer traits
//! - **Application Layer** ([`application`]) - Batch generation and HTML assembly
//! - **Infrastructure Layer** ([`infrastructure`]) - `qrcode` and `printpdf` renderers
//! - **API Layer** ([`api`]) - Generation and health handlers, DTOs, middleware
//! - **Web Layer** ([`web`]) - HTML form page
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! # open http://localhost:3000/
//!
//! # or without the server
//! cargo run --bin qrgen -- generate --category WEBSITE_URL --count 10 --color '#112233'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::BatchGenerator;
    pub use crate::domain::entities::{Category, CodeEntry, Color, Document, GenerationRequest};
    pub use crate::domain::renderers::{PdfRenderer, QrRenderer};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
