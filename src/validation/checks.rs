//! Individual palette validation checks.

use std::collections::HashSet;

use crate::score::{pairwise_report, LARGE_AA};
use crate::sim::simulate;
use crate::types::{Colour, Palette, VisionDeficiency};

use super::diagnostics::{Diagnostic, ValidationResult};

/// Two simulated colours within this per-channel distance read as the same
/// swatch.
const COLLISION_THRESHOLD: u8 = 4;

/// A palette must hold at least one colour.
pub fn check_empty(palette: &Palette) -> ValidationResult {
    let mut result = ValidationResult::new();

    if palette.is_empty() {
        result.push(
            Diagnostic::error(
                "pal::validate::empty-palette",
                format!("palette '{}' has no colours", palette.name),
            )
            .with_help("Add at least one #RRGGBB line to the palette file"),
        );
    }

    result
}

/// Flag colours that appear more than once.
pub fn check_duplicates(palette: &Palette) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut reported: HashSet<Colour> = HashSet::new();

    for (index, colour) in palette.iter().enumerate() {
        if reported.contains(&colour) {
            continue;
        }
        let count = palette.iter().filter(|&c| c == colour).count();
        if count > 1 {
            reported.insert(colour);
            result.push(
                Diagnostic::warning(
                    "pal::validate::duplicate-colour",
                    format!("{} appears {} times (first at index {})", colour, count, index),
                )
                .with_help("Remove the duplicate entries"),
            );
        }
    }

    result
}

/// Flag pairs that fail even the large-text AA threshold.
pub fn check_low_contrast(palette: &Palette) -> ValidationResult {
    let mut result = ValidationResult::new();

    for pair in pairwise_report(palette) {
        if pair.first == pair.second {
            // Duplicate entries are reported by check_duplicates
            continue;
        }
        if !pair.grade.large_aa {
            result.push(
                Diagnostic::warning(
                    "pal::validate::low-contrast",
                    format!(
                        "{} against {} is {:.2}:1, below large-text AA ({})",
                        pair.first, pair.second, pair.ratio, LARGE_AA
                    ),
                )
                .with_help("Text in either colour on the other will be illegible"),
            );
        }
    }

    result
}

/// Flag distinct colours that collapse together under a simulated
/// colour-vision deficiency.
pub fn check_cvd_collisions(palette: &Palette) -> ValidationResult {
    let mut result = ValidationResult::new();
    let colours = palette.colours();

    for kind in VisionDeficiency::ALL {
        if kind.is_identity() {
            continue;
        }
        for i in 0..colours.len() {
            for j in (i + 1)..colours.len() {
                if colours[i] == colours[j] {
                    continue;
                }
                let a = simulate(colours[i], kind);
                let b = simulate(colours[j], kind);
                if within_collision_distance(a, b) {
                    result.push(
                        Diagnostic::warning(
                            "pal::validate::cvd-collision",
                            format!(
                                "{} and {} are indistinguishable under {} (both near {})",
                                colours[i], colours[j], kind, a
                            ),
                        )
                        .with_help("Viewers with this deficiency lose the distinction"),
                    );
                }
            }
        }
    }

    result
}

fn within_collision_distance(a: Colour, b: Colour) -> bool {
    channel_delta(a.r, b.r) <= COLLISION_THRESHOLD
        && channel_delta(a.g, b.g) <= COLLISION_THRESHOLD
        && channel_delta(a.b, b.b) <= COLLISION_THRESHOLD
}

fn channel_delta(a: u8, b: u8) -> u8 {
    a.abs_diff(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette_of(hexes: &[&str]) -> Palette {
        Palette::from_colours(
            "test",
            hexes.iter().map(|h| Colour::from_hex(h).unwrap()).collect(),
        )
    }

    #[test]
    fn test_empty_palette_is_an_error() {
        let result = check_empty(&Palette::new("empty"));
        assert!(result.has_errors());
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn test_non_empty_palette_passes() {
        assert!(check_empty(&palette_of(&["#000000"])).is_ok());
    }

    #[test]
    fn test_duplicates_reported_once_per_colour() {
        let result = check_duplicates(&palette_of(&["#FF0000", "#00FF00", "#FF0000", "#FF0000"]));
        assert_eq!(result.warning_count(), 1);

        let diagnostic = result.iter().next().unwrap();
        assert_eq!(diagnostic.code, "pal::validate::duplicate-colour");
        assert!(diagnostic.message.contains("#FF0000"));
        assert!(diagnostic.message.contains("3 times"));
    }

    #[test]
    fn test_no_duplicates_no_warnings() {
        assert!(check_duplicates(&palette_of(&["#FF0000", "#00FF00"])).is_ok());
    }

    #[test]
    fn test_black_white_has_no_low_contrast() {
        assert!(check_low_contrast(&palette_of(&["#000000", "#FFFFFF"])).is_ok());
    }

    #[test]
    fn test_near_identical_pair_is_low_contrast() {
        let result = check_low_contrast(&palette_of(&["#444444", "#555555"]));
        assert_eq!(result.warning_count(), 1);
        assert_eq!(
            result.iter().next().unwrap().code,
            "pal::validate::low-contrast"
        );
    }

    #[test]
    fn test_duplicate_pairs_not_double_reported_as_low_contrast() {
        let result = check_low_contrast(&palette_of(&["#123456", "#123456"]));
        assert!(result.is_ok());
    }

    #[test]
    fn test_nearby_reds_collide_under_deuteranopia() {
        // (217,33,33) and (220,28,35) sit on the same deuteranopic
        // confusion line: both simulate to (148, 162, 33).
        let a = Colour::new(217, 33, 33);
        let b = Colour::new(220, 28, 35);
        assert_eq!(
            simulate(a, VisionDeficiency::Deuteranopia),
            simulate(b, VisionDeficiency::Deuteranopia)
        );

        let palette = Palette::from_colours("t", vec![a, b]);
        let result = check_cvd_collisions(&palette);
        assert!(result.warning_count() >= 1, "expected a collision");
        assert!(result
            .iter()
            .all(|d| d.code == "pal::validate::cvd-collision"));
    }

    #[test]
    fn test_distinct_hues_no_collision() {
        let result = check_cvd_collisions(&palette_of(&["#000000", "#FFFFFF"]));
        assert!(result.is_ok());
    }

    #[test]
    fn test_duplicates_not_reported_as_collisions() {
        let result = check_cvd_collisions(&palette_of(&["#FF0000", "#FF0000"]));
        assert!(result.is_ok());
    }
}
