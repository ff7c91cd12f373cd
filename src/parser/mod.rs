//! Parsers for glyphpack inputs.
//!
//! - [`catalog`]: the JSON icon catalog
//! - [`svg`]: path data extraction from icon SVG files
//!
//! # Usage
//!
//! ```ignore
//! use glyphpack::parser::{extract_path, parse_catalog};
//!
//! let catalog = parse_catalog(&std::fs::read_to_string("_data/icons.json")?)?;
//! let svg = std::fs::read_to_string("icons/testicon.svg")?;
//! let path = extract_path(&svg)?;
//! ```

pub mod catalog;
pub mod svg;

pub use catalog::parse_catalog;
pub use svg::{extract_path, strip_line_breaks, SvgError};
