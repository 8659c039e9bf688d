//! Domain layer containing the batch generator's data model and seams.
//!
//! - [`entities`] - Request, color, category and output types
//! - [`renderers`] - Trait definitions for the QR and PDF engines
//!
//! The domain layer has no dependencies on infrastructure or HTTP concerns.

pub mod entities;
pub mod renderers;
