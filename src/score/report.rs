//! Pairwise contrast report over a palette.

use crate::types::{Colour, Palette};

use super::contrast::contrast_ratio;
use super::wcag::{classify, WcagGrade};

/// Contrast verdict for one unordered colour pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastPair {
    pub first: Colour,
    pub second: Colour,
    pub ratio: f64,
    pub grade: WcagGrade,
}

/// Score every unordered pair of palette entries.
///
/// Pairs follow palette index order: (0,1), (0,2), ..., (1,2), ... with no
/// self-pairs, yielding n(n-1)/2 entries. Duplicate colours still produce a
/// pair (with ratio 1); validation flags those separately.
pub fn pairwise_report(palette: &Palette) -> Vec<ContrastPair> {
    let colours = palette.colours();
    let mut pairs = Vec::with_capacity(colours.len().saturating_sub(1) * colours.len() / 2);

    for i in 0..colours.len() {
        for j in (i + 1)..colours.len() {
            let ratio = contrast_ratio(colours[i], colours[j]);
            pairs.push(ContrastPair {
                first: colours[i],
                second: colours[j],
                ratio,
                grade: classify(ratio),
            });
        }
    }

    pairs
}
