//! Input loading.
//!
//! The catalog, the index template and the shared utilities source are
//! independent reads, so they are fetched concurrently.

use std::fs;
use std::path::Path;

use crate::error::{GlyphError, Result};
use crate::parser::parse_catalog;
use crate::types::Catalog;

use super::Project;

/// Everything a build reads before touching icon SVGs.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub catalog: Catalog,
    pub index_template: String,
    pub utils_source: String,
}

/// Load all build inputs for `project`.
///
/// Fails with the first error encountered; a missing file is reported as
/// `MissingAsset`.
pub fn load_inputs(project: &Project) -> Result<Inputs> {
    let (catalog, (index_template, utils_source)) = rayon::join(
        || load_catalog(&project.catalog_path()),
        || {
            rayon::join(
                || read_text(&project.index_template_path()),
                || read_text(&project.utils_path()),
            )
        },
    );

    Ok(Inputs {
        catalog: catalog?,
        index_template: index_template?,
        utils_source: utils_source?,
    })
}

/// Read and parse the icon catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let source = read_text(path)?;
    parse_catalog(&source).map_err(|e| match e {
        GlyphError::Parse { message, help } => GlyphError::Parse {
            message: format!("{}: {}", path.display(), message),
            help,
        },
        other => other,
    })
}

pub(crate) fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| GlyphError::read(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::discover;
    use std::fs;
    use tempfile::tempdir;

    fn write_inputs(root: &Path) {
        fs::create_dir_all(root.join("_data")).unwrap();
        fs::create_dir_all(root.join("templates")).unwrap();
        fs::write(
            root.join("_data/icons.json"),
            r#"{"icons": [{"title": "A", "hex": "000000", "source": "https://a.test"}]}"#,
        )
        .unwrap();
        fs::write(root.join("templates/index.js"), "const icons = {/* icons */};").unwrap();
        fs::write(root.join("utils.mjs"), "export const a = 1;").unwrap();
    }

    #[test]
    fn test_load_inputs() {
        let dir = tempdir().unwrap();
        write_inputs(dir.path());

        let project = discover(dir.path()).unwrap();
        let inputs = load_inputs(&project).unwrap();

        assert_eq!(inputs.catalog.len(), 1);
        assert!(inputs.index_template.contains("/* icons */"));
        assert_eq!(inputs.utils_source, "export const a = 1;");
    }

    #[test]
    fn test_load_inputs_missing_template() {
        let dir = tempdir().unwrap();
        write_inputs(dir.path());
        fs::remove_file(dir.path().join("templates/index.js")).unwrap();

        let project = discover(dir.path()).unwrap();
        let err = load_inputs(&project).unwrap_err();

        match err {
            GlyphError::MissingAsset { path, .. } => assert!(path.ends_with("templates/index.js")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_catalog_parse_error_names_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icons.json");
        fs::write(&path, "not json").unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(err.to_string().contains("icons.json"));
    }
}
