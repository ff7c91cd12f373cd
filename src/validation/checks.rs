//! Validation checks for an icon catalog.
//!
//! Each check returns a `ValidationResult`; none of them stop at the first
//! problem, so one run reports everything.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use url::Url;

use crate::discovery::{read_text, scan_icons, svg_slug, Project};
use crate::error::GlyphError;
use crate::naming::{is_valid_slug, slug_to_identifier};
use crate::parser::{extract_path, strip_line_breaks};
use crate::types::Catalog;

use super::warning::{Diagnostic, ValidationResult};

const INVALID_SLUG: &str = "glyphpack::validate::invalid-slug";
const DUPLICATE_SLUG: &str = "glyphpack::validate::duplicate-slug";
const DUPLICATE_IDENTIFIER: &str = "glyphpack::validate::duplicate-identifier";
const MISSING_SVG: &str = "glyphpack::validate::missing-svg";
const EMPTY_PATH: &str = "glyphpack::validate::empty-path";
const INVALID_HEX: &str = "glyphpack::validate::invalid-hex";
const INVALID_URL: &str = "glyphpack::validate::invalid-url";
const LICENSE_WITHOUT_URL: &str = "glyphpack::validate::license-without-url";
const ORPHAN_SVG: &str = "glyphpack::validate::orphan-svg";

/// Slugs that cannot name a file in the icons directory.
pub fn check_slugs(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    for icon in &catalog.icons {
        let slug = icon.slug();
        if !is_valid_slug(&slug) {
            result.push(
                Diagnostic::error(
                    INVALID_SLUG,
                    format!("'{}' has slug '{}'", icon.title, slug),
                )
                .for_icon(slug)
                .with_help("Slugs may only contain lowercase letters, digits, '-' and '_'"),
            );
        }
    }

    result
}

/// Slugs that appear more than once.
pub fn check_duplicate_slugs(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut first_title: HashMap<String, &str> = HashMap::new();

    for icon in &catalog.icons {
        let slug = icon.slug().into_owned();
        if let Some(first) = first_title.get(&slug) {
            result.push(
                Diagnostic::error(
                    DUPLICATE_SLUG,
                    format!("'{}' and '{}' share this slug", first, icon.title),
                )
                .for_icon(slug)
                .with_help("Set an explicit `slug` on one of the entries"),
            );
        } else {
            first_title.insert(slug, &icon.title);
        }
    }

    result
}

/// Distinct slugs that map to the same export name.
pub fn check_duplicate_identifiers(catalog: &Catalog, prefix: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut owners: HashMap<String, String> = HashMap::new();

    for icon in &catalog.icons {
        let slug = icon.slug().into_owned();
        let identifier = slug_to_identifier(&slug, prefix);

        match owners.get(&identifier) {
            Some(owner) if *owner != slug => result.push(
                Diagnostic::error(
                    DUPLICATE_IDENTIFIER,
                    format!("export name '{}' is also produced by '{}'", identifier, owner),
                )
                .for_icon(slug),
            ),
            Some(_) => {}
            None => {
                owners.insert(identifier, slug);
            }
        }
    }

    result
}

/// Brand colours must be exactly six hex digits.
pub fn check_hex(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    for icon in &catalog.icons {
        if !is_valid_hex(&icon.hex) {
            result.push(
                Diagnostic::error(INVALID_HEX, format!("'{}' is not a 6-digit hex colour", icon.hex))
                    .for_icon(icon.slug())
                    .with_help("Use six hex digits without '#', e.g. FF0000"),
            );
        }
    }

    result
}

/// `source`, `guidelines` and explicit licence URLs must be http(s) URLs.
pub fn check_urls(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    for icon in &catalog.icons {
        let fields = [
            ("source", Some(icon.source.as_str())),
            ("guidelines", icon.guidelines.as_deref()),
            ("license.url", icon.license.as_ref().and_then(|l| l.url.as_deref())),
        ];

        for (field, value) in fields {
            let Some(value) = value else { continue };
            if !is_http_url(value) {
                result.push(
                    Diagnostic::warning(INVALID_URL, format!("{} '{}' is not an http(s) URL", field, value))
                        .for_icon(icon.slug()),
                );
            }
        }
    }

    result
}

/// Custom licences have no SPDX page to fall back to.
pub fn check_licenses(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    for icon in &catalog.icons {
        if let Some(license) = &icon.license {
            if license.is_custom() && license.url.is_none() {
                result.push(
                    Diagnostic::warning(
                        LICENSE_WITHOUT_URL,
                        "custom licence has no URL; the generated SPDX link will not resolve",
                    )
                    .for_icon(icon.slug())
                    .with_help("Add `url` to the licence"),
                );
            }
        }
    }

    result
}

/// Every icon needs a readable SVG with path data.
pub fn check_svgs(project: &Project, catalog: &Catalog) -> ValidationResult {
    let found: Vec<Option<Diagnostic>> = catalog
        .icons
        .par_iter()
        .filter(|icon| is_valid_slug(&icon.slug()))
        .map(|icon| {
            let slug = icon.slug().into_owned();
            let path = project.svg_path(&slug);

            match read_text(&path) {
                Ok(svg) => extract_path(&strip_line_breaks(&svg)).err().map(|e| {
                    Diagnostic::error(EMPTY_PATH, format!("{}: {}", path.display(), e)).for_icon(&slug)
                }),
                Err(GlyphError::MissingAsset { .. }) => Some(
                    Diagnostic::error(MISSING_SVG, format!("{} does not exist", path.display()))
                        .for_icon(&slug),
                ),
                Err(e) => Some(Diagnostic::error(MISSING_SVG, e.to_string()).for_icon(&slug)),
            }
        })
        .collect();

    let mut result = ValidationResult::new();
    for diagnostic in found.into_iter().flatten() {
        result.push(diagnostic);
    }
    result
}

/// SVG files that no catalog entry refers to.
pub fn check_orphan_svgs(project: &Project, catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();
    let icons_dir = project.icons_dir();
    let slugs: HashSet<String> = catalog.icons.iter().map(|i| i.slug().into_owned()).collect();

    for svg in scan_icons(&icons_dir, &project.manifest).svgs {
        let Some(slug) = svg_slug(&icons_dir, &svg) else {
            continue;
        };
        if !slugs.contains(&slug) {
            result.push(
                Diagnostic::warning(
                    ORPHAN_SVG,
                    format!("{} is not referenced by the catalog", svg.display()),
                )
                .with_help("Add a catalog entry or remove the file"),
            );
        }
    }

    result
}

fn is_valid_hex(hex: &str) -> bool {
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}
