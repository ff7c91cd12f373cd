//! Icon record serialization.
//!
//! Records become JavaScript object literals with a fixed field order:
//! `title`, `slug`, `path`, `source`, `hex`, then `guidelines` and `license`
//! when the icon has them. Absent optional fields are left out entirely.

use crate::codegen::escape::quote;
use crate::types::{EnrichedIcon, License};

/// Incremental builder for a single-line object literal.
#[derive(Debug, Default)]
pub struct ObjectLiteral {
    fields: Vec<(&'static str, String)>,
}

impl ObjectLiteral {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a string field; the value is escaped and quoted.
    pub fn string(mut self, key: &'static str, value: &str) -> Self {
        self.fields.push((key, quote(value)));
        self
    }

    /// Add a string field only when a value is present.
    pub fn optional_string(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.string(key, value),
            None => self,
        }
    }

    /// Add a field whose value is already valid source text.
    pub fn raw(mut self, key: &'static str, source: String) -> Self {
        self.fields.push((key, source));
        self
    }

    pub fn finish(self) -> String {
        let body: Vec<String> = self
            .fields
            .into_iter()
            .map(|(key, value)| format!("{key}:{value}"))
            .collect();
        format!("{{{}}}", body.join(","))
    }
}

/// Serialize a licence as `{type:'...',url:'...'}`.
pub fn license_to_object(license: &License) -> String {
    ObjectLiteral::new()
        .string("type", &license.kind)
        .string("url", &license.resolved_url())
        .finish()
}

/// Serialize an enriched icon as an object literal.
pub fn icon_to_object(icon: &EnrichedIcon) -> String {
    let object = ObjectLiteral::new()
        .string("title", icon.title())
        .string("slug", &icon.slug)
        .string("path", &icon.path)
        .string("source", icon.source())
        .string("hex", icon.hex())
        .optional_string("guidelines", icon.guidelines());

    let object = match icon.license() {
        Some(license) => object.raw("license", license_to_object(license)),
        None => object,
    };

    object.finish()
}
