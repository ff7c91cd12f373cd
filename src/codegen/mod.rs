//! Code generation for the icon package outputs.
//!
//! - [`escape`]: single-quote escaping for string literals
//! - [`object`]: icon record to object literal serialization
//! - [`barrel`]: per-icon entries for every output format
//! - [`module`]: complete module source for each output file

pub mod barrel;
pub mod escape;
pub mod module;
pub mod object;

pub use barrel::{assemble, Barrels, TYPE_ALIAS};
pub use escape::{escape, quote};
pub use module::{
    render_commonjs, render_declarations, render_esm, render_index, DEPRECATION_HELPER,
    UTILS_COMMONJS, UTILS_ESM,
};
pub use object::{icon_to_object, license_to_object, ObjectLiteral};
