//! glyphpack - JavaScript icon package generator
//!
//! Reads a catalog of brand icons (metadata plus one SVG per icon) and
//! generates the files of an npm package: a slug-keyed index, CommonJS and
//! ES module barrels with one export per icon, type declarations, and a
//! CommonJS build of the shared runtime utilities.

pub mod build;
pub mod cli;
pub mod codegen;
pub mod discovery;
pub mod error;
pub mod naming;
pub mod output;
pub mod parser;
pub mod transform;
pub mod types;
pub mod validation;

pub use build::{build_project, BuildReport};
pub use codegen::{assemble, escape, icon_to_object, Barrels};
pub use discovery::{discover, load_inputs, Inputs, Manifest, Project};
pub use error::{GlyphError, Result};
pub use naming::{slug_to_identifier, title_to_slug};
pub use types::{Catalog, EnrichedIcon, IconRecord, License};
pub use validation::{validate_catalog, Diagnostic, Severity, ValidationResult};
