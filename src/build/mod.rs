//! The build pipeline.
//!
//! Inputs are loaded, icons enriched, barrels assembled and every output
//! rendered and transformed before the first file is written. A failure
//! anywhere before writing leaves existing outputs untouched.
//!
//! # Example
//!
//! ```ignore
//! use glyphpack::build::build_project;
//! use glyphpack::discovery::discover;
//! use glyphpack::output::Printer;
//!
//! let project = discover(".")?;
//! let report = build_project(&project, &Printer::new())?;
//! println!("{} icons", report.icons);
//! ```

mod enrich;
mod writer;

use std::path::PathBuf;

pub use enrich::{enrich, enrich_all, resolve_slugs};
pub use writer::{write_outputs, OutputFile};

use crate::codegen::{
    assemble, render_commonjs, render_declarations, render_esm, render_index, Barrels,
    DEPRECATION_HELPER,
};
use crate::discovery::{load_inputs, Inputs, Project};
use crate::error::{GlyphError, Result};
use crate::output::{display_path, format_size, plural, Printer};
use crate::transform::{esm_to_commonjs, transform, ModuleKind};

/// Generic aggregate module keyed by slug.
pub const INDEX_FILE: &str = "index.js";
/// CommonJS icon barrel.
pub const ICONS_COMMONJS_FILE: &str = "icons.js";
/// ES module icon barrel.
pub const ICONS_ESM_FILE: &str = "icons.mjs";
/// Type declarations for the barrels.
pub const ICONS_DECLARATIONS_FILE: &str = "icons.d.ts";
/// CommonJS build of the shared utilities.
pub const UTILS_FILE: &str = "utils.js";

/// Summary of a finished build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Number of icons built.
    pub icons: usize,
    /// Paths written, in write order.
    pub written: Vec<PathBuf>,
}

/// Run the full build for `project`.
pub fn build_project(project: &Project, printer: &Printer) -> Result<BuildReport> {
    printer.status("Loading", &display_path(&project.catalog_path()));
    let inputs = load_inputs(project)?;

    let outputs = render_project(project, inputs, printer)?;
    let written = write_outputs(project, &outputs.files, printer)?;

    printer.success(
        "Finished",
        &format!(
            "{} into {}",
            plural(outputs.icons, "icon", "icons"),
            display_path(&project.output_dir())
        ),
    );

    Ok(BuildReport {
        icons: outputs.icons,
        written,
    })
}

/// Rendered outputs of a build, not yet written.
#[derive(Debug, Clone)]
pub struct RenderedOutputs {
    pub icons: usize,
    pub files: Vec<OutputFile>,
}

/// Everything between loading and writing: enrichment, assembly, codegen
/// and transforms.
pub fn render_project(project: &Project, inputs: Inputs, printer: &Printer) -> Result<RenderedOutputs> {
    let Inputs {
        catalog,
        index_template,
        utils_source,
    } = inputs;

    let slugs = resolve_slugs(&catalog)?;
    let icons = enrich_all(project, catalog, slugs)?;
    let svg_bytes: usize = icons.iter().map(|icon| icon.svg.len()).sum();
    printer.status(
        "Enriched",
        &format!("{} ({} of SVG)", plural(icons.len(), "icon", "icons"), format_size(svg_bytes)),
    );

    let barrels = assemble(&icons, &project.manifest.prefix)?;
    let files = render_outputs(project, &barrels, &index_template, &utils_source)?;

    Ok(RenderedOutputs {
        icons: icons.len(),
        files,
    })
}

/// Render and transform every output file from assembled barrels.
pub fn render_outputs(
    project: &Project,
    barrels: &Barrels,
    index_template: &str,
    utils_source: &str,
) -> Result<Vec<OutputFile>> {
    let manifest = &project.manifest;
    let minify = manifest.minify;

    let index = transform(
        &render_index(index_template, barrels)?,
        ModuleKind::CommonJs,
        INDEX_FILE,
        minify,
    )?;

    let icons_commonjs = transform(
        &render_commonjs(barrels, ICONS_COMMONJS_FILE),
        ModuleKind::CommonJs,
        ICONS_COMMONJS_FILE,
        minify,
    )?;

    let icons_esm = transform(
        &render_esm(barrels, ICONS_ESM_FILE),
        ModuleKind::EsModule,
        ICONS_ESM_FILE,
        minify,
    )?;

    let declarations = render_declarations(barrels, &manifest.type_module, &manifest.type_name);

    let utils = esm_to_commonjs(utils_source, UTILS_FILE)?;
    if !utils.exports_name(DEPRECATION_HELPER) {
        return Err(GlyphError::TransformFailure {
            output: UTILS_FILE.to_string(),
            message: format!(
                "{} does not export `{}`, which the icon barrels call",
                display_path(&project.utils_path()),
                DEPRECATION_HELPER
            ),
        });
    }
    let utils = transform(&utils.code, ModuleKind::CommonJs, UTILS_FILE, minify)?;

    Ok(vec![
        OutputFile::new(INDEX_FILE, index),
        OutputFile::new(ICONS_COMMONJS_FILE, icons_commonjs),
        OutputFile::new(ICONS_ESM_FILE, icons_esm),
        OutputFile::new(ICONS_DECLARATIONS_FILE, declarations),
        OutputFile::new(UTILS_FILE, utils),
    ])
}
