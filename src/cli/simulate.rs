//! Simulate command: preview a palette under a colour-vision deficiency.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::sim::simulate;
use crate::types::VisionDeficiency;

/// Preview a palette under a simulated colour-vision deficiency
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Palette file or directory of .palette files (builtin palette when omitted)
    pub path: Option<PathBuf>,

    /// Vision deficiency to simulate
    #[arg(long, value_enum, default_value_t = VisionDeficiency::Normal)]
    pub kind: VisionDeficiency,

    /// Simulate every deficiency class, not just --kind
    #[arg(long, conflicts_with = "kind")]
    pub all: bool,
}

pub fn run(args: SimulateArgs, printer: &Printer) -> Result<()> {
    let palettes = super::load_palettes(args.path.as_deref())?;

    let kinds: Vec<VisionDeficiency> = if args.all {
        VisionDeficiency::ALL
            .into_iter()
            .filter(|k| !k.is_identity())
            .collect()
    } else {
        vec![args.kind]
    };

    for palette in &palettes {
        for &kind in &kinds {
            printer.status("Simulating", &format!("{} under {}", palette.name, kind));

            for colour in palette.iter() {
                let seen = simulate(colour, kind);
                println!(
                    "{}{}  ->  {}{}",
                    printer.swatch(colour),
                    colour,
                    printer.swatch(seen),
                    seen
                );
            }
        }
    }

    Ok(())
}
