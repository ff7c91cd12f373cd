//! Output writing.

use std::fs;
use std::path::PathBuf;

use crate::discovery::Project;
use crate::error::{GlyphError, Result};
use crate::output::{display_path, format_size, Printer};

/// A fully rendered output, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// File name relative to the output directory.
    pub name: &'static str,
    pub contents: String,
}

impl OutputFile {
    pub fn new(name: &'static str, contents: String) -> Self {
        Self { name, contents }
    }
}

/// Write every output in order. The first failure aborts; files already
/// written stay in place.
pub fn write_outputs(project: &Project, outputs: &[OutputFile], printer: &Printer) -> Result<Vec<PathBuf>> {
    let dir = project.output_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(|e| GlyphError::WriteFailure {
            path: dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut written = Vec::with_capacity(outputs.len());
    for output in outputs {
        let path = project.output_path(output.name);
        fs::write(&path, &output.contents).map_err(|e| GlyphError::WriteFailure {
            path: path.clone(),
            message: e.to_string(),
        })?;

        printer.status(
            "Writing",
            &format!(
                "{} {}",
                display_path(&path),
                printer.dim(&format!("({})", format_size(output.contents.len())))
            ),
        );
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::Manifest;
    use tempfile::tempdir;

    #[test]
    fn test_write_outputs_creates_directory() {
        let dir = tempdir().unwrap();
        let manifest = Manifest {
            output: PathBuf::from("dist/pkg"),
            ..Default::default()
        };
        let project = Project::new(dir.path(), manifest);
        let outputs = vec![
            OutputFile::new("icons.js", "module.exports={};".to_string()),
            OutputFile::new("icons.d.ts", "export type I = 1;\n".to_string()),
        ];

        let written = write_outputs(&project, &outputs, &Printer::silent()).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(
            fs::read_to_string(dir.path().join("dist/pkg/icons.js")).unwrap(),
            "module.exports={};"
        );
    }

    #[test]
    fn test_write_outputs_failure() {
        let dir = tempdir().unwrap();
        // A file where the output directory should be.
        fs::write(dir.path().join("dist"), "").unwrap();
        let manifest = Manifest {
            output: PathBuf::from("dist"),
            ..Default::default()
        };
        let project = Project::new(dir.path(), manifest);
        let outputs = vec![OutputFile::new("icons.js", String::new())];

        let err = write_outputs(&project, &outputs, &Printer::silent()).unwrap_err();
        assert!(matches!(err, GlyphError::WriteFailure { .. }));
    }
}
