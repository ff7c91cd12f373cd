//! Project discovery and input loading.
//!
//! A project is a directory with an icon catalog, an icons directory, an
//! index template and a shared utilities module. Paths follow a fixed
//! convention unless a `glyphpack.yaml` manifest overrides them.
//!
//! # Example
//!
//! ```ignore
//! use glyphpack::discovery::{discover, load_inputs};
//!
//! let project = discover(".")?;
//! let inputs = load_inputs(&project)?;
//! println!("{} icons", inputs.catalog.len());
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use loader::{load_catalog, load_inputs, Inputs};
pub(crate) use loader::read_text;
pub use manifest::Manifest;
pub use scanner::{scan_icons, svg_slug, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "glyphpack.yaml";

/// Name of the index template inside the templates directory.
pub const INDEX_TEMPLATE: &str = "index.js";

/// A discovered project with its resolved configuration.
#[derive(Debug, Clone)]
pub struct Project {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no glyphpack.yaml found).
    pub manifest: Manifest,

    /// Whether a glyphpack.yaml manifest was found.
    pub has_manifest: bool,
}

impl Project {
    /// A project at `root` using `manifest` as-is.
    pub fn new(root: impl Into<PathBuf>, manifest: Manifest) -> Self {
        Self {
            root: root.into(),
            manifest,
            has_manifest: false,
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.resolve(&self.manifest.catalog)
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.resolve(&self.manifest.icons_dir)
    }

    /// Conventional location of the SVG for `slug`.
    pub fn svg_path(&self, slug: &str) -> PathBuf {
        self.icons_dir().join(format!("{}.svg", slug))
    }

    pub fn index_template_path(&self) -> PathBuf {
        self.resolve(&self.manifest.templates_dir).join(INDEX_TEMPLATE)
    }

    pub fn utils_path(&self) -> PathBuf {
        self.resolve(&self.manifest.utils)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.manifest.output)
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir().join(file_name)
    }
}

/// Discover the project rooted at `root`.
///
/// Loads `glyphpack.yaml` from the root when present; otherwise the
/// conventional layout is assumed.
pub fn discover(root: impl AsRef<Path>) -> Result<Project> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    Ok(Project {
        root,
        manifest,
        has_manifest,
    })
}
