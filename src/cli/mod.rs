pub mod build;
pub mod completions;
pub mod init;
pub mod validate;

use clap::{Parser, Subcommand};

/// glyphpack - JavaScript icon package generator
#[derive(Parser, Debug)]
#[command(name = "glyphpack")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Defaults to `build` in the current directory
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the icon modules from the catalog
    Build(build::BuildArgs),

    /// Check the catalog and icons without writing anything
    Validate(validate::ValidateArgs),

    /// Initialize a glyphpack project (generates glyphpack.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
