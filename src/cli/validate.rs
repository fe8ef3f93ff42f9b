//! Validate command: run palette checks and report diagnostics.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::find_palette_files;
use crate::error::{PalError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_palette_file;
use crate::validation::{print_diagnostics, validate_palette};

/// Run validation checks against palette files
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Palette files or directories to validate
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let mut failed = 0usize;
    let mut total = 0usize;

    for path in &args.paths {
        for file in find_palette_files(path)? {
            total += 1;
            let palette = parse_palette_file(&file)?;

            printer.status(
                "Validating",
                &format!("{} ({})", display_path(&file), palette.name),
            );

            let result = validate_palette(&palette);
            print_diagnostics(&result);

            if result.has_errors() {
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(PalError::Validation {
            message: format!(
                "{} of {} failed validation",
                plural(failed, "palette", "palettes"),
                total
            ),
            help: None,
        });
    }

    Ok(())
}
