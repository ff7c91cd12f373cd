//! Icon catalog parsing.
//!
//! The catalog is a JSON document with a single `icons` array. Order is
//! significant: every generated output follows it.

use crate::error::{GlyphError, Result};
use crate::types::Catalog;

/// Parse a catalog from its JSON source.
pub fn parse_catalog(source: &str) -> Result<Catalog> {
    serde_json::from_str(source).map_err(|e| GlyphError::Parse {
        message: format!("Invalid catalog: {}", e),
        help: Some("The catalog must be a JSON object with an `icons` array".to_string()),
    })
}
