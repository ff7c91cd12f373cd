use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for glyphpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum GlyphError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(glyphpack::io))]
    Io { path: PathBuf, message: String },

    #[error("Missing asset: {path}")]
    #[diagnostic(code(glyphpack::missing_asset))]
    MissingAsset {
        path: PathBuf,
        #[help]
        help: Option<String>,
    },

    #[error("Could not extract path data for '{slug}': {message}")]
    #[diagnostic(
        code(glyphpack::extraction),
        help("Each icon SVG needs at least one <path> element with a non-empty `d` attribute")
    )]
    ExtractionFailure { slug: String, message: String },

    #[error("Invalid slug '{slug}' for '{title}'")]
    #[diagnostic(
        code(glyphpack::invalid_slug),
        help("Slugs may only contain lowercase letters, digits, '-' and '_'")
    )]
    InvalidSlug { slug: String, title: String },

    #[error("Duplicate slug '{slug}' in catalog")]
    #[diagnostic(
        code(glyphpack::duplicate_slug),
        help("Give one of the entries an explicit `slug` to disambiguate")
    )]
    DuplicateSlug { slug: String },

    #[error("Slugs '{first}' and '{second}' both map to export name '{identifier}'")]
    #[diagnostic(code(glyphpack::duplicate_identifier))]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },

    #[error("Transform of {output} failed: {message}")]
    #[diagnostic(
        code(glyphpack::transform),
        help("The generated source is not valid JavaScript; this usually points at an escaping problem in the catalog or template")
    )]
    TransformFailure { output: String, message: String },

    #[error("Failed to write {path}: {message}")]
    #[diagnostic(code(glyphpack::write))]
    WriteFailure { path: PathBuf, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(glyphpack::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Template error: {message}")]
    #[diagnostic(code(glyphpack::template))]
    Template {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(glyphpack::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation failed: {message}")]
    #[diagnostic(code(glyphpack::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl GlyphError {
    /// Build the error for a failed read, distinguishing absent files.
    pub fn read(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            GlyphError::MissingAsset { path, help: None }
        } else {
            GlyphError::Io {
                path,
                message: err.to_string(),
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GlyphError>;
