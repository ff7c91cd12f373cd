//! Per-icon enrichment: slug resolution, SVG loading and path extraction.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::discovery::{read_text, Project};
use crate::error::{GlyphError, Result};
use crate::naming::is_valid_slug;
use crate::parser::{extract_path, strip_line_breaks};
use crate::types::{Catalog, EnrichedIcon, IconRecord};

/// Resolve every record's slug, in catalog order.
///
/// Two records with the same slug would write the same SVG path and export
/// name, so any repeat is fatal. Slugs name files under the icons
/// directory, so anything outside `[a-z0-9_-]` is rejected.
pub fn resolve_slugs(catalog: &Catalog) -> Result<Vec<String>> {
    let mut seen = HashSet::with_capacity(catalog.len());
    let mut slugs = Vec::with_capacity(catalog.len());

    for icon in &catalog.icons {
        let slug = icon.slug().into_owned();
        if !is_valid_slug(&slug) {
            return Err(GlyphError::InvalidSlug {
                slug,
                title: icon.title.clone(),
            });
        }
        if !seen.insert(slug.clone()) {
            return Err(GlyphError::DuplicateSlug { slug });
        }
        slugs.push(slug);
    }

    Ok(slugs)
}

/// Load the SVG for `record` and attach its markup and path data.
pub fn enrich(project: &Project, record: IconRecord, slug: String) -> Result<EnrichedIcon> {
    let svg_path = project.svg_path(&slug);
    let svg = strip_line_breaks(&read_text(&svg_path).map_err(|e| match e {
        GlyphError::MissingAsset { path, .. } => GlyphError::MissingAsset {
            path,
            help: Some(format!(
                "Catalog entry '{}' expects its SVG at this path",
                record.title
            )),
        },
        other => other,
    })?);

    let path = extract_path(&svg).map_err(|e| GlyphError::ExtractionFailure {
        slug: slug.clone(),
        message: e.to_string(),
    })?;

    Ok(EnrichedIcon {
        record,
        slug,
        svg,
        path,
    })
}

/// Enrich every record concurrently.
///
/// Output order matches catalog order. Any single failure fails the whole
/// batch.
pub fn enrich_all(project: &Project, catalog: Catalog, slugs: Vec<String>) -> Result<Vec<EnrichedIcon>> {
    catalog
        .icons
        .into_par_iter()
        .zip(slugs.into_par_iter())
        .map(|(record, slug)| enrich(project, record, slug))
        .collect()
}
