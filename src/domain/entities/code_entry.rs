//! A generated sample paired with its rendered QR code.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// MIME type of [`CodeEntry::image`].
pub const IMAGE_MIME_TYPE: &str = "image/svg+xml";

/// One row of the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    /// Sample value, unique within its document.
    pub data: String,
    /// SVG markup of the QR code, without an XML declaration.
    pub image: String,
}

impl CodeEntry {
    pub fn new(data: String, image: String) -> Self {
        Self { data, image }
    }

    /// Standard base64 of the SVG markup, for embedding as a data URI.
    pub fn encoded_image(&self) -> String {
        STANDARD.encode(self.image.as_bytes())
    }
}

/// Ordered entries of one generated batch. Rendered once, then dropped.
pub type Document = Vec<CodeEntry>;
