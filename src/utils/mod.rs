//! Utility functions for sample generation and markup handling.
//!
//! - [`sample_data`] - Per-category fake sample generators
//! - [`iban`] - IBAN generation and mod-97 validation
//! - [`svg`] - SVG prolog stripping

pub mod iban;
pub mod sample_data;
pub mod svg;
