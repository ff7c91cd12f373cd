//! Project manifest (glyphpack.yaml) parsing.
//!
//! Every field is optional; an absent manifest means the conventional
//! layout (`_data/icons.json`, `icons/`, `templates/`, `utils.mjs`) with
//! outputs written to the project root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GlyphError, Result};

/// Project manifest loaded from glyphpack.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Icon catalog (JSON).
    pub catalog: PathBuf,

    /// Directory holding `<slug>.svg` files.
    pub icons_dir: PathBuf,

    /// Directory holding `index.js`.
    pub templates_dir: PathBuf,

    /// Shared runtime utilities (ES module source).
    pub utils: PathBuf,

    /// Directory the generated files are written to.
    pub output: PathBuf,

    /// Prefix of every export name (`si` -> `siGithub`).
    pub prefix: String,

    /// Module the declaration file imports the icon type from.
    pub type_module: String,

    /// Name of the exported icon type in `type_module`.
    pub type_name: String,

    /// Minify executable outputs.
    pub minify: bool,

    /// Patterns ignored when scanning the icons directory.
    pub excludes: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("_data/icons.json"),
            icons_dir: PathBuf::from("icons"),
            templates_dir: PathBuf::from("templates"),
            utils: PathBuf::from("utils.mjs"),
            output: PathBuf::from("."),
            prefix: "si".to_string(),
            type_module: "./types".to_string(),
            type_name: "Icon".to_string(),
            minify: true,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a glyphpack.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GlyphError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| GlyphError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check glyphpack.yaml syntax".to_string()),
        })
    }

    /// Render the manifest as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| GlyphError::Parse {
            message: format!("Could not serialize manifest: {}", e),
            help: None,
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy().replace('\\', "/");
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }
}

/// Minimal glob matching: `*.ext`, `dir/*`, `**/dir/*` and plain substrings.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(rest) = pattern.strip_prefix("**/") {
        return match rest.strip_suffix("/*") {
            Some(dir) => path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir)),
            None => path.ends_with(rest) || path.contains(rest),
        };
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !pattern.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(dir) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
    }

    path.contains(pattern)
}
