use clap::Parser;
use glyphpack::cli::{build::BuildArgs, Cli, Commands};
use glyphpack::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command.unwrap_or_else(|| Commands::Build(BuildArgs::default())) {
        Commands::Build(args) => glyphpack::cli::build::run(args, &printer)?,
        Commands::Validate(args) => glyphpack::cli::validate::run(args, &printer)?,
        Commands::Init(args) => glyphpack::cli::init::run(args, &printer)?,
        Commands::Completions(args) => glyphpack::cli::completions::run(args)?,
    }

    Ok(())
}
