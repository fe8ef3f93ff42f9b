//! Colour type and hex parsing.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{PalError, Result};

/// An sRGB colour value. No alpha channel; palettes are opaque by contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Accepts exactly six hex digits with an optional leading `#`,
    /// case-insensitive. Shorthand (`#RGB`) and alpha (`#RRGGBBAA`) forms
    /// are rejected: the palette data model is fixed-width opaque sRGB.
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PalError::MalformedColour {
                input: s.to_string(),
                help: Some("Use the #RRGGBB format: six hex digits, no alpha".to_string()),
            });
        }

        let r = parse_hex_byte(&hex[0..2], s)?;
        let g = parse_hex_byte(&hex[2..4], s)?;
        let b = parse_hex_byte(&hex[4..6], s)?;
        Ok(Self::new(r, g, b))
    }

    /// Build a colour from floating-point channels.
    ///
    /// Each channel is clamped into [0, 255], then rounded to the nearest
    /// integer. Clamp first, round second.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// The channels as an array, in RGB order.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Colour {
    type Err = PalError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

/// Parse a two-character hex byte.
fn parse_hex_byte(pair: &str, original: &str) -> Result<u8> {
    u8::from_str_radix(pair, 16).map_err(|_| PalError::MalformedColour {
        input: original.to_string(),
        help: None,
    })
}
