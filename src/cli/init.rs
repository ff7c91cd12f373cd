//! Init command implementation.
//!
//! Writes a `glyphpack.yaml` manifest and scaffolds any missing inputs
//! (catalog, icons directory, index template, shared utilities) so that a
//! fresh project builds straight away.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{Manifest, Project, MANIFEST_FILENAME};
use crate::error::{GlyphError, Result};
use crate::output::{display_path, Printer};

/// Starter index template: a slug-keyed lookup over every icon.
pub const DEFAULT_INDEX_TEMPLATE: &str = r#"const icons = {/* icons */};

module.exports = {
  getIcon(slug) {
    return Object.prototype.hasOwnProperty.call(icons, slug) ? icons[slug] : undefined;
  },
};
"#;

/// Starter shared utilities with the helper the barrels call.
pub const DEFAULT_UTILS: &str = r#"const warned = new Set();

export function warnDeprecatedEntry(entry) {
  if (warned.has(entry)) return;
  warned.add(entry);
  if (typeof console !== 'undefined') {
    console.warn(`${entry} is deprecated; import icons individually instead.`);
  }
}

export const getIconSlug = (icon) => icon.slug;
"#;

const EMPTY_CATALOG: &str = "{\n  \"icons\": []\n}\n";

/// Initialize a glyphpack project by generating glyphpack.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing glyphpack.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(GlyphError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let manifest = Manifest::default();
    write_file(&manifest_path, &manifest.to_yaml()?, printer)?;

    let project = Project::new(&args.path, manifest);
    scaffold(&project.catalog_path(), EMPTY_CATALOG, printer)?;
    scaffold(&project.index_template_path(), DEFAULT_INDEX_TEMPLATE, printer)?;
    scaffold(&project.utils_path(), DEFAULT_UTILS, printer)?;

    let icons_dir = project.icons_dir();
    if !icons_dir.exists() {
        fs::create_dir_all(&icons_dir).map_err(|e| GlyphError::WriteFailure {
            path: icons_dir.clone(),
            message: e.to_string(),
        })?;
        printer.status("Created", &display_path(&icons_dir));
    }

    Ok(())
}

/// Write `contents` to `path` unless the file already exists.
fn scaffold(path: &Path, contents: &str, printer: &Printer) -> Result<()> {
    if path.exists() {
        printer.info("Keeping", &display_path(path));
        return Ok(());
    }
    write_file(path, contents, printer)
}

fn write_file(path: &Path, contents: &str, printer: &Printer) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GlyphError::WriteFailure {
            path: parent.to_path_buf(),
            message: e.to_string(),
        })?;
    }
    fs::write(path, contents).map_err(|e| GlyphError::WriteFailure {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    printer.status("Created", &display_path(path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::build_project;
    use crate::discovery::discover;
    use tempfile::tempdir;

    #[test]
    fn test_init_scaffolds_buildable_project() {
        let dir = tempdir().unwrap();
        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &Printer::silent()).unwrap();

        assert!(dir.path().join(MANIFEST_FILENAME).exists());
        assert!(dir.path().join("icons").is_dir());

        let project = discover(dir.path()).unwrap();
        assert!(project.has_manifest);
        let report = build_project(&project, &Printer::silent()).unwrap();
        assert_eq!(report.icons, 0);
        assert!(dir.path().join("icons.mjs").exists());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "prefix: x\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        assert!(run(args, &Printer::silent()).is_err());
    }

    #[test]
    fn test_init_keeps_existing_inputs() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("utils.mjs"), "export const warnDeprecatedEntry = 1;\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &Printer::silent()).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("utils.mjs")).unwrap(),
            "export const warnDeprecatedEntry = 1;\n"
        );
    }
}
