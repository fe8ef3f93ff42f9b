//! WCAG contrast ratio.

use crate::error::Result;
use crate::types::Colour;

use super::luminance::relative_luminance;

/// Contrast ratio between two colours, in [1, 21].
///
/// `(L1 + 0.05) / (L2 + 0.05)` with L1 the lighter and L2 the darker
/// luminance. Symmetric in its arguments; a colour against itself is
/// exactly 1.
pub fn contrast_ratio(a: Colour, b: Colour) -> f64 {
    let lum_a = relative_luminance(a);
    let lum_b = relative_luminance(b);

    let (lighter, darker) = if lum_a > lum_b {
        (lum_a, lum_b)
    } else {
        (lum_b, lum_a)
    };

    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio for two hex strings.
///
/// Fails with `MalformedColour` when either input does not parse.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64> {
    Ok(contrast_ratio(Colour::from_hex(a)?, Colour::from_hex(b)?))
}
