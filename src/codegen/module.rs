//! Full module source for each generated output.

use std::sync::LazyLock;

use regex::Regex;

use crate::codegen::barrel::{Barrels, TYPE_ALIAS};
use crate::codegen::escape::quote;
use crate::error::{GlyphError, Result};

/// Runtime helper that the barrels call to warn about their deprecation.
pub const DEPRECATION_HELPER: &str = "warnDeprecatedEntry";

/// Import specifier of the shared utilities from the CommonJS barrel.
pub const UTILS_COMMONJS: &str = "./utils.js";

/// Import specifier of the shared utilities from the ES module barrel.
pub const UTILS_ESM: &str = "./utils.mjs";

/// Marker in `templates/index.js` replaced by the keyed icon entries.
static ICONS_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*[ \t\r\n]*icons[ \t\r\n]*\*/").expect("placeholder pattern is valid"));

/// Fill the index template with the keyed icon collection.
///
/// The template must contain exactly one `/* icons */` marker, typically
/// inside an object literal: `const icons = {/* icons */};`.
pub fn render_index(template: &str, barrels: &Barrels) -> Result<String> {
    let count = ICONS_PLACEHOLDER.find_iter(template).count();
    if count != 1 {
        return Err(GlyphError::Template {
            message: format!("index template has {} `/* icons */` placeholders, expected 1", count),
            help: Some("Place a single `/* icons */` inside the object literal that holds the icons".to_string()),
        });
    }

    let entries = barrels.index.join(",");
    Ok(ICONS_PLACEHOLDER
        .replace(template, regex::NoExpand(&entries))
        .into_owned())
}

/// CommonJS barrel: prelude requiring the deprecation helper, then one
/// `module.exports` object with every icon.
pub fn render_commonjs(barrels: &Barrels, entry: &str) -> String {
    let mut out = String::new();
    out.push_str("'use strict';\n");
    out.push_str(&format!(
        "const {{ {helper} }} = require({utils});\n{helper}({entry});\n",
        helper = DEPRECATION_HELPER,
        utils = quote(UTILS_COMMONJS),
        entry = quote(entry),
    ));
    out.push_str("module.exports = {\n");
    for line in &barrels.commonjs {
        out.push_str(line);
        out.push_str(",\n");
    }
    out.push_str("};\n");
    out
}

/// ES module barrel: one `export const` per icon.
pub fn render_esm(barrels: &Barrels, entry: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "import {{ {helper} }} from {utils};\n{helper}({entry});\n",
        helper = DEPRECATION_HELPER,
        utils = quote(UTILS_ESM),
        entry = quote(entry),
    ));
    for line in &barrels.esm {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Type declarations: a local alias of the shared icon type, then one
/// constant per icon.
pub fn render_declarations(barrels: &Barrels, type_module: &str, type_name: &str) -> String {
    let mut out = format!(
        "export type {} = import({}).{};\n",
        TYPE_ALIAS,
        quote(type_module),
        type_name
    );
    for line in &barrels.declarations {
        out.push_str(line);
        out.push('\n');
    }
    out
}
