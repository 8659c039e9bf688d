//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer on top of
//! third-party engines.
//!
//! # Modules
//!
//! - [`render`] - QR (`qrcode`) and PDF (`printpdf`) renderer implementations

pub mod render;
