//! QR code rendering to SVG via the `qrcode` crate.

use qrcode::QrCode;
use qrcode::render::svg;
use serde_json::json;

use crate::domain::entities::Color;
use crate::domain::renderers::QrRenderer;
use crate::error::AppError;

/// Minimum edge length of the generated SVG, in user units.
const MIN_DIMENSION: u32 = 100;

/// Draws QR codes as SVG with a configurable dark color on white.
#[derive(Debug, Clone, Default)]
pub struct SvgQrRenderer;

impl SvgQrRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl QrRenderer for SvgQrRenderer {
    fn render_svg(&self, payload: &str, color: Color) -> Result<String, AppError> {
        let code = QrCode::new(payload.as_bytes()).map_err(|e| {
            AppError::render(
                "QR code rendering failed",
                json!({ "stage": "qr", "reason": e.to_string(), "payload_len": payload.len() }),
            )
        })?;

        let dark = color.to_hex();
        let light = Color::WHITE.to_hex();

        Ok(code
            .render::<svg::Color>()
            .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
            .dark_color(svg::Color(&dark))
            .light_color(svg::Color(&light))
            .build())
    }
}
