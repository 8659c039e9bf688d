//! Renderer trait for drawing a QR code as SVG.

use crate::domain::entities::Color;
use crate::error::AppError;

/// Encodes a payload as a QR code and draws it as SVG markup.
///
/// # Implementations
///
/// - [`crate::infrastructure::render::SvgQrRenderer`] - `qrcode` crate
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait QrRenderer: Send + Sync {
    /// Renders `payload` with dark modules painted in `color`.
    ///
    /// The returned markup may start with an XML declaration; the batch
    /// pipeline strips it before embedding.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Render`] if the payload does not fit in a QR code.
    fn render_svg(&self, payload: &str, color: Color) -> Result<String, AppError>;
}
