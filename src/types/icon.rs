//! Icon records as they appear in the catalog, and after enrichment.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::naming::title_to_slug;
use crate::types::License;

/// One icon entry in the catalog. Unknown keys such as `aliases` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconRecord {
    /// Display name; free text.
    pub title: String,

    /// Explicit slug, used when the derived one would collide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Brand colour as six hex digits, without `#`.
    pub hex: String,

    /// URL the icon was taken from.
    pub source: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidelines: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

impl IconRecord {
    /// Create a record with the required fields only.
    pub fn new(title: impl Into<String>, hex: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: None,
            hex: hex.into(),
            source: source.into(),
            guidelines: None,
            license: None,
        }
    }

    /// The canonical slug: the explicit one if present, else derived from the title.
    pub fn slug(&self) -> Cow<'_, str> {
        match &self.slug {
            Some(slug) => Cow::Borrowed(slug),
            None => Cow::Owned(title_to_slug(&self.title)),
        }
    }
}

/// The ordered icon catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub icons: Vec<IconRecord>,
}

impl Catalog {
    pub fn new(icons: Vec<IconRecord>) -> Self {
        Self { icons }
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// A catalog record with its SVG loaded and path data extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedIcon {
    pub record: IconRecord,
    /// Catalog-unique slug.
    pub slug: String,
    /// SVG markup with line breaks removed.
    pub svg: String,
    /// `d` attribute data of the icon's path(s).
    pub path: String,
}

impl EnrichedIcon {
    pub fn title(&self) -> &str {
        &self.record.title
    }

    pub fn hex(&self) -> &str {
        &self.record.hex
    }

    pub fn source(&self) -> &str {
        &self.record.source
    }

    pub fn guidelines(&self) -> Option<&str> {
        self.record.guidelines.as_deref()
    }

    pub fn license(&self) -> Option<&License> {
        self.record.license.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_derived_from_title() {
        let icon = IconRecord::new("Test Icon", "FF0000", "https://example.com");
        assert_eq!(icon.slug(), "testicon");
    }

    #[test]
    fn test_explicit_slug_wins() {
        let mut icon = IconRecord::new("Test Icon", "FF0000", "https://example.com");
        icon.slug = Some("test_icon".to_string());
        assert_eq!(icon.slug(), "test_icon");
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let icon: IconRecord = serde_json::from_str(
            r#"{"title": "Rust", "hex": "000000", "source": "https://rust-lang.org"}"#,
        )
        .unwrap();

        assert_eq!(icon.title, "Rust");
        assert!(icon.guidelines.is_none());
        assert!(icon.license.is_none());
    }
}
