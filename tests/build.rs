//! End-to-end builds of the fixture project.

use std::fs;
use std::path::{Path, PathBuf};

use glyphpack::output::Printer;
use glyphpack::{build_project, discover, validate_catalog, GlyphError, Manifest, Project};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("project")
}

fn fixture_project(output: &Path, minify: bool) -> Project {
    let manifest = Manifest {
        output: output.to_path_buf(),
        minify,
        ..Default::default()
    };
    Project::new(fixture_root(), manifest)
}

#[test]
fn fixture_builds_every_output() {
    let out = tempdir().unwrap();
    let project = fixture_project(out.path(), true);

    let report = build_project(&project, &Printer::silent()).unwrap();

    assert_eq!(report.icons, 4);
    let names: Vec<_> = report
        .written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["index.js", "icons.js", "icons.mjs", "icons.d.ts", "utils.js"]
    );
}

#[test]
fn fixture_unminified_outputs() {
    let out = tempdir().unwrap();
    let project = fixture_project(out.path(), false);
    build_project(&project, &Printer::silent()).unwrap();

    let esm = fs::read_to_string(out.path().join("icons.mjs")).unwrap();
    let lines: Vec<&str> = esm.lines().collect();
    assert_eq!(lines[0], "import { warnDeprecatedEntry } from './utils.mjs';");
    assert_eq!(lines[1], "warnDeprecatedEntry('icons.mjs');");
    assert_eq!(
        lines[2],
        "export const siTesticon={title:'Test Icon',slug:'testicon',path:'M0 0h10v10z',source:'https://example.com',hex:'FF0000'};"
    );
    assert!(lines[3].starts_with(r"export const siMcdonalds={title:'McDonald\'s',slug:'mcdonalds',"));
    assert!(lines[3].ends_with(",hex:'FBC817',guidelines:'https://www.mcdonalds.com/brand'};"));
    assert!(lines[4].ends_with(",license:{type:'MIT',url:'https://spdx.org/licenses/MIT'}};"));
    assert!(lines[5].starts_with("export const siDotNet={title:'Dot Net',slug:'dot-net',path:'M24 8.77h-2.468v7.565h-1.425V8.77h-2.462V7.53H24z M0 0h1v1z',"));
    assert!(lines[5].contains("license:{type:'custom',url:'https://github.com/dotnet/brand/blob/main/LICENSE'}"));

    let dts = fs::read_to_string(out.path().join("icons.d.ts")).unwrap();
    assert_eq!(
        dts,
        "export type I = import('./types').Icon;\n\
         export const siTesticon: I;\n\
         export const siMcdonalds: I;\n\
         export const siNodedotjs: I;\n\
         export const siDotNet: I;\n"
    );

    let cjs = fs::read_to_string(out.path().join("icons.js")).unwrap();
    assert!(cjs.contains("const { warnDeprecatedEntry } = require('./utils.js');"));
    assert!(cjs.contains("siNodedotjs:{title:'Node.js',slug:'nodedotjs',"));

    let index = fs::read_to_string(out.path().join("index.js")).unwrap();
    assert!(index.starts_with("const icons = {'testicon':{title:'Test Icon',"));
    assert!(index.contains("'dot-net':{title:'Dot Net',slug:'dot-net',"));

    let utils = fs::read_to_string(out.path().join("utils.js")).unwrap();
    assert!(utils.ends_with(
        "module.exports = { warnDeprecatedEntry, getIconSlug, titleToHtmlFriendly };\n"
    ));
}

#[test]
fn fixture_minified_outputs_are_smaller() {
    let plain = tempdir().unwrap();
    let minified = tempdir().unwrap();
    build_project(&fixture_project(plain.path(), false), &Printer::silent()).unwrap();
    build_project(&fixture_project(minified.path(), true), &Printer::silent()).unwrap();

    for name in ["index.js", "icons.js", "icons.mjs", "utils.js"] {
        let a = fs::read_to_string(plain.path().join(name)).unwrap();
        let b = fs::read_to_string(minified.path().join(name)).unwrap();
        assert!(b.len() < a.len(), "{name} was not minified");
    }

    let esm = fs::read_to_string(minified.path().join("icons.mjs")).unwrap();
    assert!(esm.contains(
        "siTesticon={title:'Test Icon',slug:'testicon',path:'M0 0h10v10z',source:'https://example.com',hex:'FF0000'}"
    ));
    assert!(esm.contains(r"siMcdonalds={title:'McDonald\'s',slug:'mcdonalds',"));
    assert!(esm.contains("license:{type:'MIT',url:'https://spdx.org/licenses/MIT'}"));
    assert!(esm.contains("siDotNet={title:'Dot Net',slug:'dot-net',"));
    assert!(!esm.contains('`'), "{esm}");

    // Declarations are never minified.
    assert_eq!(
        fs::read_to_string(plain.path().join("icons.d.ts")).unwrap(),
        fs::read_to_string(minified.path().join("icons.d.ts")).unwrap()
    );
}

#[test]
fn fixture_validates_cleanly() {
    let project = discover(fixture_root()).unwrap();
    let catalog = glyphpack::discovery::load_catalog(&project.catalog_path()).unwrap();

    let result = validate_catalog(&project, &catalog);
    assert!(result.is_ok(), "{:?}", result);
}

#[test]
fn missing_svg_aborts_without_writing() {
    let root = tempdir().unwrap();
    fs::create_dir_all(root.path().join("_data")).unwrap();
    fs::create_dir_all(root.path().join("templates")).unwrap();
    fs::write(
        root.path().join("_data/icons.json"),
        r#"{"icons": [{"title": "Nowhere", "hex": "000000", "source": "https://example.com"}]}"#,
    )
    .unwrap();
    fs::copy(
        fixture_root().join("templates/index.js"),
        root.path().join("templates/index.js"),
    )
    .unwrap();
    fs::copy(fixture_root().join("utils.mjs"), root.path().join("utils.mjs")).unwrap();
    fs::write(root.path().join("icons.d.ts"), "// previous").unwrap();

    let project = discover(root.path()).unwrap();
    let err = build_project(&project, &Printer::silent()).unwrap_err();

    assert!(matches!(err, GlyphError::MissingAsset { .. }));
    assert_eq!(
        fs::read_to_string(root.path().join("icons.d.ts")).unwrap(),
        "// previous"
    );
    for name in ["index.js", "icons.js", "icons.mjs", "utils.js"] {
        assert!(!root.path().join(name).exists(), "{name} should not be written");
    }
}
