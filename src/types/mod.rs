//! Core domain types for glyphpack.
//!
//! - `IconRecord` - one catalog entry as authored
//! - `License` - SPDX or custom licence attached to an icon
//! - `EnrichedIcon` - a record plus its slug, SVG markup and path data
//! - `Catalog` - the ordered collection of records

mod icon;
mod license;

pub use icon::{Catalog, EnrichedIcon, IconRecord};
pub use license::{License, SPDX_LICENSE_BASE};
