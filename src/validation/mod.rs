//! Validation system for colour palettes.
//!
//! Runs a suite of checks against a palette and reports errors and
//! warnings: empty palettes, duplicate colours, pairs that fail even the
//! weakest WCAG threshold, and pairs that collapse together under a
//! simulated colour-vision deficiency. Used by `pal validate`.

mod checks;
mod diagnostics;

pub use diagnostics::{Diagnostic, Severity, ValidationResult};

use crate::types::Palette;

/// Run all validation checks against a palette.
pub fn validate_palette(palette: &Palette) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_empty(palette));
    result.merge(checks::check_duplicates(palette));
    result.merge(checks::check_low_contrast(palette));
    result.merge(checks::check_cvd_collisions(palette));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult) {
    for d in result.iter() {
        eprintln!("  {}[{}]: {}", d.severity, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        eprintln!(
            "Validation failed: {} error(s), {} warning(s)",
            errors, warnings
        );
    } else if warnings > 0 {
        eprintln!("Validation passed ({} warning(s))", warnings);
    } else {
        eprintln!("Validation passed.");
    }
}

#[cfg(test)]
mod tests {
    use crate::types::Colour;

    use super::*;

    #[test]
    fn test_clean_palette() {
        let palette = Palette::from_colours("t", vec![Colour::BLACK, Colour::WHITE]);
        let result = validate_palette(&palette);
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_palette_fails() {
        let result = validate_palette(&Palette::new("empty"));
        assert!(result.has_errors());
    }

    #[test]
    fn test_all_checks_merge() {
        // One duplicate pair: duplicate-colour warning, but no low-contrast
        // or collision noise from the identical entries.
        let c = Colour::new(0x2e, 0x63, 0xeb);
        let palette = Palette::from_colours("t", vec![c, c]);
        let result = validate_palette(&palette);

        assert!(!result.has_errors());
        assert_eq!(result.warning_count(), 1);
    }
}
