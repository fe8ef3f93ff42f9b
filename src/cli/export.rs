//! Export command: write the palette JSON artifact.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use crate::error::{PalError, Result};
use crate::export::{build_export, to_json_string, write_export};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_palette_file;
use crate::types::Palette;

/// Export a palette and its contrast report as JSON
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Palette file to export (builtin palette when omitted)
    pub path: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Override the palette name in the export
    #[arg(long)]
    pub name: Option<String>,
}

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let mut palette = match &args.path {
        Some(path) if path.is_dir() => {
            return Err(PalError::Io {
                path: path.clone(),
                message: "Export takes a single palette file, not a directory".to_string(),
            });
        }
        Some(path) => parse_palette_file(path)?,
        None => Palette::default_palette(),
    };

    if let Some(name) = args.name {
        palette.name = name;
    }

    let export = build_export(&palette, Utc::now());

    match &args.output {
        Some(path) => {
            write_export(&export, path)?;
            printer.status(
                "Exported",
                &format!(
                    "{} ({}, {}) to {}",
                    export.name,
                    plural(export.colors.len(), "colour", "colours"),
                    plural(export.contrast_pairs.len(), "pair", "pairs"),
                    display_path(path)
                ),
            );
        }
        None => {
            println!("{}", to_json_string(&export)?);
        }
    }

    Ok(())
}
