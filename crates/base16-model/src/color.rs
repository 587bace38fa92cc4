//! 24-bit sRGB colors and their hex text form.
//!
//! Scheme files store colors as six hex digits (`1d1f21`), sometimes with a
//! leading `#`. [`Rgb`] parses either form and always renders lowercase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `rrggbb` or `#rrggbb`. Digits may be upper or lower case.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] unless exactly six hex digits
    /// remain after stripping one optional `#`.
    pub fn from_hex(value: &str) -> Result<Self> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 {
            return Err(ColorError::invalid_hex(value, "expected 6 hex digits"));
        }
        let mut channels = [0u8; 3];
        hex::decode_to_slice(digits, &mut channels)
            .map_err(|_| ColorError::invalid_hex(value, "contains a non-hex digit"))?;
        let [r, g, b] = channels;
        Ok(Self { r, g, b })
    }

    /// Lowercase `rrggbb` without a leading `#`.
    pub fn to_hex(self) -> String {
        hex::encode([self.r, self.g, self.b])
    }

    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn from_channels([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}
