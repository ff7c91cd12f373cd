//! ES module to CommonJS rewriting for the shared utilities module.
//!
//! Only the subset a small helper module needs is supported: named imports,
//! namespace and default imports, exported declarations and export lists.
//! Everything else at the top level is copied through unchanged.

use oxc::allocator::Allocator;
use oxc::ast::ast::{Declaration, ImportDeclarationSpecifier, Statement};
use oxc::span::GetSpan;

use crate::codegen::escape::quote;
use crate::error::{GlyphError, Result};

use super::{parse, ModuleKind};

/// Result of rewriting an ES module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonJsModule {
    /// CommonJS source text.
    pub code: String,
    /// Exported names, in declaration order.
    pub exports: Vec<String>,
}

impl CommonJsModule {
    pub fn exports_name(&self, name: &str) -> bool {
        self.exports.iter().any(|e| e == name)
    }
}

/// Rewrite `source` (an ES module) as CommonJS.
///
/// `output` names the file being produced, for error messages.
pub fn esm_to_commonjs(source: &str, output: &str) -> Result<CommonJsModule> {
    let allocator = Allocator::default();
    let ret = parse(&allocator, source, ModuleKind::EsModule, output)?;

    let unsupported = |what: &str| GlyphError::TransformFailure {
        output: output.to_string(),
        message: format!("{} is not supported in the shared utilities module", what),
    };

    let mut code = String::from("'use strict';\n");
    // (exported name, local binding)
    let mut exports: Vec<(String, String)> = Vec::new();

    for stmt in &ret.program.body {
        match stmt {
            Statement::ImportDeclaration(import) => {
                let from = quote(import.source.value.as_str());
                let Some(specifiers) = &import.specifiers else {
                    code.push_str(&format!("require({});\n", from));
                    continue;
                };

                let mut named = Vec::new();
                for specifier in specifiers {
                    match specifier {
                        ImportDeclarationSpecifier::ImportSpecifier(spec) => {
                            let imported = spec.imported.name().to_string();
                            let local = spec.local.name.to_string();
                            if imported == local {
                                named.push(local);
                            } else {
                                named.push(format!("{}: {}", imported, local));
                            }
                        }
                        ImportDeclarationSpecifier::ImportDefaultSpecifier(spec) => {
                            code.push_str(&format!(
                                "const {} = require({}).default;\n",
                                spec.local.name, from
                            ));
                        }
                        ImportDeclarationSpecifier::ImportNamespaceSpecifier(spec) => {
                            code.push_str(&format!("const {} = require({});\n", spec.local.name, from));
                        }
                    }
                }

                if !named.is_empty() {
                    code.push_str(&format!(
                        "const {{ {} }} = require({});\n",
                        named.join(", "),
                        from
                    ));
                }
            }
            Statement::ExportNamedDeclaration(export) => {
                if export.source.is_some() {
                    return Err(unsupported("`export ... from`"));
                }

                if let Some(declaration) = &export.declaration {
                    for name in declared_names(declaration).ok_or_else(|| unsupported("a destructuring export"))? {
                        exports.push((name.clone(), name));
                    }
                    code.push_str(declaration.span().source_text(source));
                    code.push('\n');
                }

                for specifier in &export.specifiers {
                    exports.push((
                        specifier.exported.name().to_string(),
                        specifier.local.name().to_string(),
                    ));
                }
            }
            Statement::ExportDefaultDeclaration(_) => return Err(unsupported("a default export")),
            Statement::ExportAllDeclaration(_) => return Err(unsupported("`export *`")),
            other => {
                code.push_str(other.span().source_text(source));
                code.push('\n');
            }
        }
    }

    let members: Vec<String> = exports
        .iter()
        .map(|(exported, local)| {
            if exported == local {
                exported.clone()
            } else {
                format!("{}: {}", exported, local)
            }
        })
        .collect();
    code.push_str(&format!("module.exports = {{ {} }};\n", members.join(", ")));

    Ok(CommonJsModule {
        code,
        exports: exports.into_iter().map(|(exported, _)| exported).collect(),
    })
}

/// Names bound by an exported declaration; `None` for destructuring patterns.
fn declared_names(declaration: &Declaration<'_>) -> Option<Vec<String>> {
    match declaration {
        Declaration::VariableDeclaration(var) => var
            .declarations
            .iter()
            .map(|d| d.id.get_binding_identifier().map(|id| id.name.to_string()))
            .collect(),
        Declaration::FunctionDeclaration(func) => {
            Some(func.id.iter().map(|id| id.name.to_string()).collect())
        }
        Declaration::ClassDeclaration(class) => {
            Some(class.id.iter().map(|id| id.name.to_string()).collect())
        }
        _ => Some(Vec::new()),
    }
}
