pub mod check;
pub mod completions;
pub mod export;
pub mod report;
pub mod sample;
pub mod simulate;
pub mod validate;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::discovery::find_palette_files;
use crate::error::Result;
use crate::parser::parse_palette_file;
use crate::types::Palette;

/// pal - WCAG palette contrast and colour-vision audit tool
#[derive(Parser, Debug)]
#[command(name = "pal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the contrast ratio between two colours
    Check(check::CheckArgs),

    /// Score every colour pair in a palette against WCAG thresholds
    Report(report::ReportArgs),

    /// Preview a palette under a simulated colour-vision deficiency
    Simulate(simulate::SimulateArgs),

    /// Export a palette and its contrast report as JSON
    Export(export::ExportArgs),

    /// Run validation checks against palette files
    Validate(validate::ValidateArgs),

    /// Extract a palette from a PNG file
    Sample(sample::SampleArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Resolve an optional path argument to palettes.
///
/// No path means the builtin starter palette; a file parses as one
/// palette; a directory is walked for `.palette` files.
pub(crate) fn load_palettes(path: Option<&Path>) -> Result<Vec<Palette>> {
    let Some(path) = path else {
        return Ok(vec![Palette::default_palette()]);
    };

    find_palette_files(path)?
        .iter()
        .map(|file| parse_palette_file(file))
        .collect()
}
