//! Build command implementation.
//!
//! Generates `index.js`, `icons.js`, `icons.mjs`, `icons.d.ts` and
//! `utils.js` from the project catalog.

use std::path::PathBuf;

use clap::Args;

use crate::build::build_project;
use crate::discovery::discover;
use crate::error::Result;
use crate::output::Printer;

/// Generate the icon modules from the catalog
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Project root (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Write outputs without minifying them
    #[arg(long)]
    pub no_minify: bool,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            no_minify: false,
        }
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let mut project = discover(&args.path)?;
    if args.no_minify {
        project.manifest.minify = false;
    }

    build_project(&project, printer)?;
    Ok(())
}
