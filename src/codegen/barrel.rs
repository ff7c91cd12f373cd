//! Barrel assembly.
//!
//! One ordered pass over the enriched icons produces the entries of every
//! generated module. Catalog order is kept; nothing is sorted.

use std::collections::HashMap;

use crate::codegen::escape::quote;
use crate::codegen::object::icon_to_object;
use crate::error::{GlyphError, Result};
use crate::naming::slug_to_identifier;
use crate::types::EnrichedIcon;

/// Name of the type alias declared at the top of `icons.d.ts`.
pub const TYPE_ALIAS: &str = "I";

/// Per-icon entries for every output format, in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Barrels {
    /// Export identifiers, parallel to the other collections.
    pub identifiers: Vec<String>,
    /// `'<slug>':<object>` entries for the generic index.
    pub index: Vec<String>,
    /// `<identifier>:<object>` entries for `module.exports`.
    pub commonjs: Vec<String>,
    /// `export const <identifier>=<object>;` lines.
    pub esm: Vec<String>,
    /// `export const <identifier>: I;` lines.
    pub declarations: Vec<String>,
}

impl Barrels {
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

/// Build all barrel entries for `icons`.
///
/// Fails with `DuplicateIdentifier` when two slugs map to the same export
/// name (for example `dot-net` and `dot_net`).
pub fn assemble(icons: &[EnrichedIcon], prefix: &str) -> Result<Barrels> {
    let mut barrels = Barrels::default();
    let mut owners: HashMap<String, &str> = HashMap::with_capacity(icons.len());

    for icon in icons {
        let identifier = slug_to_identifier(&icon.slug, prefix);

        if let Some(first) = owners.insert(identifier.clone(), &icon.slug) {
            return Err(GlyphError::DuplicateIdentifier {
                identifier,
                first: first.to_string(),
                second: icon.slug.clone(),
            });
        }

        let object = icon_to_object(icon);

        barrels.index.push(format!("{}:{}", quote(&icon.slug), object));
        barrels.commonjs.push(format!("{}:{}", identifier, object));
        barrels.esm.push(format!("export const {}={};", identifier, object));
        barrels
            .declarations
            .push(format!("export const {}: {};", identifier, TYPE_ALIAS));
        barrels.identifiers.push(identifier);
    }

    Ok(barrels)
}
