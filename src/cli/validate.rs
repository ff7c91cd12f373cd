//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, load_catalog};
use crate::error::{GlyphError, Result};
use crate::output::{display_path, plural, Printer};
use crate::validation::{print_diagnostics, validate_catalog};

/// Check the catalog and icons without writing anything
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Project root (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let project = discover(&args.path)?;
    let catalog_path = project.catalog_path();

    printer.status("Checking", &display_path(&catalog_path));
    let catalog = load_catalog(&catalog_path)?;
    printer.info("Found", &plural(catalog.len(), "icon", "icons"));

    let result = validate_catalog(&project, &catalog);
    print_diagnostics(&result, printer);

    if result.has_errors() {
        return Err(GlyphError::Validation {
            message: format!("{} error(s) in {}", result.error_count(), display_path(&catalog_path)),
            help: Some("Fix the errors above and run `glyphpack validate` again".to_string()),
        });
    }

    Ok(())
}
