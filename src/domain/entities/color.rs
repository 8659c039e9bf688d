//! RGB color used for the dark modules of every QR code in a batch.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a #RRGGBB color")]
pub struct ColorParseError(pub String);

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `#` followed by exactly six hex digits (either case).
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] for a missing `#`, wrong length, or
    /// non-hex digits. No channel is ever left unset.
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        if !HEX_COLOR_REGEX.is_match(input) {
            return Err(ColorParseError(input.to_string()));
        }

        let mut channels = [0u8; 3];
        hex::decode_to_slice(&input[1..], &mut channels)
            .map_err(|_| ColorParseError(input.to_string()))?;

        let [red, green, blue] = channels;
        Ok(Self { red, green, blue })
    }

    /// Lowercase `#rrggbb` form, as understood by SVG.
    pub fn to_hex(self) -> String {
        format!("#{}", hex::encode([self.red, self.green, self.blue]))
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
