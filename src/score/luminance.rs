//! Relative luminance per WCAG 2.x.

use crate::types::Colour;

/// ITU-R BT.709 luma weights.
const WEIGHT_R: f64 = 0.2126;
const WEIGHT_G: f64 = 0.7152;
const WEIGHT_B: f64 = 0.0722;

/// Knee of the piecewise sRGB transfer function (the WCAG 2.x constant).
const LINEAR_KNEE: f64 = 0.03928;

/// Convert one sRGB channel (0-255) to linear light.
fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= LINEAR_KNEE {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a colour, in [0, 1].
///
/// Gamma-expands each channel and combines them with the BT.709 weights,
/// per the WCAG 2.x definition.
pub fn relative_luminance(colour: Colour) -> f64 {
    WEIGHT_R * srgb_to_linear(colour.r)
        + WEIGHT_G * srgb_to_linear(colour.g)
        + WEIGHT_B * srgb_to_linear(colour.b)
}
