//! Check command: contrast ratio and WCAG verdicts for one colour pair.

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::score::{classify, contrast_ratio};
use crate::types::Colour;

/// Check the contrast ratio between two colours
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Foreground (text) colour, e.g. #2563EB
    pub foreground: String,

    /// Background colour, e.g. #FFFFFF
    pub background: String,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let foreground = Colour::from_hex(&args.foreground)?;
    let background = Colour::from_hex(&args.background)?;

    let ratio = contrast_ratio(foreground, background);
    let grade = classify(ratio);

    printer.status(
        "Checking",
        &format!(
            "{}{} on {}{}",
            printer.swatch(foreground),
            foreground,
            printer.swatch(background),
            background
        ),
    );

    println!("{}", printer.bold(&format!("{:.2}:1", ratio)));
    println!("  Normal text AA   {}", printer.pass_fail(grade.normal_aa));
    println!("  Normal text AAA  {}", printer.pass_fail(grade.normal_aaa));
    println!("  Large text AA    {}", printer.pass_fail(grade.large_aa));
    println!("  Large text AAA   {}", printer.pass_fail(grade.large_aaa));

    Ok(())
}
