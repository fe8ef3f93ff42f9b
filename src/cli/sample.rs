//! Sample command: extract a palette from a PNG file.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Args;

use crate::error::{PalError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::Colour;

/// Extract a palette from a PNG file
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// PNG file to extract colours from
    #[arg(required = true)]
    pub file: PathBuf,

    /// Maximum number of colours to output
    #[arg(long)]
    pub max: Option<usize>,
}

pub fn run(args: SampleArgs, printer: &Printer) -> Result<()> {
    let path = &args.file;
    let display = display_path(path);

    let img = image::open(path)
        .map_err(|e| PalError::Io {
            path: path.clone(),
            message: e.to_string(),
        })?
        .to_rgba8();

    // Count pixel frequencies, skipping fully transparent pixels
    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();
    for pixel in img.pixels() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }
        *counts.entry([r, g, b]).or_insert(0) += 1;
    }

    // Most common first; tie-break on channel value so output is stable
    let mut colours: Vec<([u8; 3], usize)> = counts.into_iter().collect();
    colours.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    if let Some(max) = args.max {
        colours.truncate(max);
    }

    let total = colours.len();
    printer.status(
        "Sampled",
        &format!("{} from {}", plural(total, "colour", "colours"), display),
    );

    // Print palette-file lines to stdout, ready to redirect into a .palette
    for (i, ([r, g, b], _count)) in colours.iter().enumerate() {
        let colour = Colour::new(*r, *g, *b);
        println!("$colour-{}: {}", i + 1, colour);
    }

    Ok(())
}
