//! Icon directory scanner.
//!
//! Walks the icons directory for `.svg` files, used to spot SVGs that no
//! catalog entry refers to.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// Result of scanning the icons directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered SVG files, sorted.
    pub svgs: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.svgs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.svgs.is_empty()
    }
}

/// Recursively scan `root` for SVG files, skipping excluded paths.
pub fn scan_icons(root: &Path, manifest: &Manifest) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !entry.file_type().is_file() || !is_svg(path) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if manifest.is_excluded(relative) {
            continue;
        }

        result.svgs.push(path.to_path_buf());
    }

    result.svgs.sort();
    result
}

/// The slug an SVG file at `path` under `root` would serve: its
/// root-relative path without the `.svg` extension.
pub fn svg_slug(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let stem = relative.with_extension("");
    Some(stem.to_string_lossy().replace('\\', "/"))
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();
        let result = scan_icons(dir.path(), &Manifest::default());

        assert!(result.is_empty());
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn test_scan_finds_svgs_only() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("a.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("readme.md"), "# Icons").unwrap();

        let result = scan_icons(dir.path(), &Manifest::default());

        assert_eq!(result.total(), 2);
        assert!(result.svgs[0].ends_with("a.svg"));
        assert!(result.svgs[1].ends_with("b.svg"));
    }

    #[test]
    fn test_scan_with_excludes() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("a.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("drafts/b.svg"), "<svg/>").unwrap();

        let manifest = Manifest {
            excludes: vec!["drafts/*".to_string()],
            ..Default::default()
        };
        let result = scan_icons(dir.path(), &manifest);

        assert_eq!(result.total(), 1);
        assert!(result.svgs[0].ends_with("a.svg"));
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let result = scan_icons(Path::new("/nonexistent/path"), &Manifest::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_svg_slug() {
        let root = Path::new("/p/icons");
        assert_eq!(svg_slug(root, Path::new("/p/icons/github.svg")), Some("github".to_string()));
        assert_eq!(svg_slug(root, Path::new("/p/icons/sub/x.svg")), Some("sub/x".to_string()));
        assert_eq!(svg_slug(root, Path::new("/elsewhere/x.svg")), None);
    }
}
