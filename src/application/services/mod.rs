//! Business logic services for the application layer.

pub mod batch_generator;
pub mod document_assembler;

pub use batch_generator::{BatchGenerator, MAX_ATTEMPTS_PER_SAMPLE};
pub use document_assembler::assemble_html;
