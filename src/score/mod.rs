//! Contrast scoring pipeline.
//!
//! Implements the WCAG 2.x contrast maths: sRGB linearization and relative
//! luminance, contrast ratio, threshold classification, and the pairwise
//! palette report. Everything here is a pure function over its inputs.

mod contrast;
mod luminance;
mod report;
mod wcag;

pub use contrast::{contrast_ratio, contrast_ratio_hex};
pub use luminance::relative_luminance;
pub use report::{pairwise_report, ContrastPair};
pub use wcag::{classify, WcagGrade, LARGE_AA, LARGE_AAA, NORMAL_AA, NORMAL_AAA};
