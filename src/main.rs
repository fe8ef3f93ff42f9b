use clap::Parser;
use miette::Result;
use pal::cli::{Cli, Commands};
use pal::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Check(args) => pal::cli::check::run(args, &printer)?,
        Commands::Report(args) => pal::cli::report::run(args, &printer)?,
        Commands::Simulate(args) => pal::cli::simulate::run(args, &printer)?,
        Commands::Export(args) => pal::cli::export::run(args, &printer)?,
        Commands::Validate(args) => pal::cli::validate::run(args, &printer)?,
        Commands::Sample(args) => pal::cli::sample::run(args, &printer)?,
        Commands::Completions(args) => pal::cli::completions::run(args)?,
    }

    Ok(())
}
