//! Report command: pairwise contrast table for a palette.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::score::pairwise_report;

/// Score every colour pair in a palette against WCAG thresholds
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Palette file or directory of .palette files (builtin palette when omitted)
    pub path: Option<PathBuf>,
}

pub fn run(args: ReportArgs, printer: &Printer) -> Result<()> {
    let palettes = super::load_palettes(args.path.as_deref())?;

    for palette in &palettes {
        let pairs = pairwise_report(palette);

        printer.status(
            "Reporting",
            &format!(
                "{} ({}, {})",
                palette.name,
                plural(palette.len(), "colour", "colours"),
                plural(pairs.len(), "pair", "pairs")
            ),
        );

        for pair in &pairs {
            println!(
                "{}{} on {}{}  {:>8}  normal AA {}  AAA {}",
                printer.swatch(pair.first),
                pair.first,
                printer.swatch(pair.second),
                pair.second,
                format!("{:.2}:1", pair.ratio),
                printer.pass_fail(pair.grade.normal_aa),
                printer.pass_fail(pair.grade.normal_aaa),
            );
        }

        let passing = pairs.iter().filter(|p| p.grade.normal_aa).count();
        printer.info(
            "Summary",
            &format!("{} of {} passing normal-text AA", passing, pairs.len()),
        );
    }

    Ok(())
}
