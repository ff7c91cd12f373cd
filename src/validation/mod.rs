//! Catalog validation.
//!
//! Runs a suite of checks against a project's catalog and icons directory
//! and reports errors and warnings. Used by `glyphpack validate`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::discovery::Project;
use crate::output::Printer;
use crate::types::Catalog;

/// Run all validation checks.
pub fn validate_catalog(project: &Project, catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_slugs(catalog));
    result.merge(checks::check_duplicate_slugs(catalog));
    result.merge(checks::check_duplicate_identifiers(catalog, &project.manifest.prefix));
    result.merge(checks::check_hex(catalog));
    result.merge(checks::check_urls(catalog));
    result.merge(checks::check_licenses(catalog));
    result.merge(checks::check_svgs(project, catalog));
    result.merge(checks::check_orphan_svgs(project, catalog));

    result
}

/// Print diagnostics and a summary line.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        let subject = d
            .slug
            .as_deref()
            .map(|s| format!("{}: ", printer.bold(s)))
            .unwrap_or_default();
        printer.line(&format!("{}[{}]: {}{}", label, d.code, subject, d.message));
        if let Some(help) = &d.help {
            printer.line(&format!("  {} {}", printer.dim("help:"), help));
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        printer.error(
            "Failed",
            &format!("{} error(s), {} warning(s)", errors, warnings),
        );
    } else if warnings > 0 {
        printer.warning("Passed", &format!("{} warning(s)", warnings));
    } else {
        printer.success("Passed", "no problems found");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::Manifest;
    use crate::types::IconRecord;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_empty_catalog() {
        let dir = tempdir().unwrap();
        let project = Project::new(dir.path(), Manifest::default());
        let result = validate_catalog(&project, &Catalog::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_valid_catalog() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("icons")).unwrap();
        fs::write(dir.path().join("icons/testicon.svg"), "<svg><path d=\"M0 0h10v10z\"/></svg>").unwrap();
        let project = Project::new(dir.path(), Manifest::default());
        let catalog = Catalog::new(vec![IconRecord::new("Test Icon", "FF0000", "https://example.com")]);

        let result = validate_catalog(&project, &catalog);
        assert!(result.is_ok(), "{:?}", result);
    }

    #[test]
    fn test_validate_reports_everything() {
        let dir = tempdir().unwrap();
        let project = Project::new(dir.path(), Manifest::default());
        let mut bad = IconRecord::new("Bad", "red", "https://example.com");
        bad.guidelines = Some("nope".to_string());
        let catalog = Catalog::new(vec![bad]);

        let result = validate_catalog(&project, &catalog);

        // invalid hex + missing svg
        assert_eq!(result.error_count(), 2);
        assert_eq!(result.warning_count(), 1);
    }
}
