//! Licence metadata for icons.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Base URL used for SPDX licences that carry no explicit URL.
pub const SPDX_LICENSE_BASE: &str = "https://spdx.org/licenses/";

/// Licence attached to an icon.
///
/// `kind` is usually an SPDX identifier (e.g. `CC0-1.0`); the special value
/// `custom` marks a licence that only makes sense together with a `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl License {
    /// Create an SPDX licence without an explicit URL.
    pub fn spdx(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            url: None,
        }
    }

    /// Create a licence with an explicit URL.
    pub fn with_url(kind: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            url: Some(url.into()),
        }
    }

    /// The URL to publish for this licence.
    ///
    /// Falls back to the SPDX page for `kind`. The licence itself is never
    /// modified, so resolving twice yields the same value.
    pub fn resolved_url(&self) -> Cow<'_, str> {
        match &self.url {
            Some(url) => Cow::Borrowed(url),
            None => Cow::Owned(format!("{}{}", SPDX_LICENSE_BASE, self.kind)),
        }
    }

    /// Whether this is a custom (non-SPDX) licence.
    pub fn is_custom(&self) -> bool {
        self.kind.eq_ignore_ascii_case("custom")
    }
}
