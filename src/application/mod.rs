//! Application layer orchestrating the generation pipeline.
//!
//! Services consume the renderer traits from [`crate::domain::renderers`] and
//! provide a clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::batch_generator::BatchGenerator`] - Sample generation, QR rendering, PDF output
//! - [`services::document_assembler`] - HTML fragment assembly
pub mod services;
