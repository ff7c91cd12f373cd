//! Syntax checking, module conversion and minification of generated code.
//!
//! Uses oxc for parsing, minification and printing. Every executable output
//! is parsed before it is written; a parse failure means the generator
//! produced invalid source and aborts the build.

mod commonjs;
mod quotes;

pub use commonjs::{esm_to_commonjs, CommonJsModule};
pub use quotes::{single_quote_strings, single_quoted};

use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::{Parser, ParserReturn};
use oxc::span::SourceType;

use crate::error::{GlyphError, Result};

/// Module system of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    CommonJs,
    EsModule,
}

impl ModuleKind {
    pub fn source_type(self) -> SourceType {
        match self {
            ModuleKind::CommonJs => SourceType::cjs(),
            ModuleKind::EsModule => SourceType::mjs(),
        }
    }
}

/// Parse `source`, failing with every syntax error oxc reports.
pub(crate) fn parse<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    kind: ModuleKind,
    output: &str,
) -> Result<ParserReturn<'a>> {
    let ret = Parser::new(allocator, source, kind.source_type()).parse();

    if !ret.errors.is_empty() || ret.panicked {
        let messages: Vec<String> = ret.errors.iter().map(|e| e.to_string()).collect();
        return Err(GlyphError::TransformFailure {
            output: output.to_string(),
            message: if messages.is_empty() {
                "parser gave up".to_string()
            } else {
                messages.join("; ")
            },
        });
    }

    Ok(ret)
}

/// Check that `source` parses as `kind`.
pub fn check_syntax(source: &str, kind: ModuleKind, output: &str) -> Result<()> {
    let allocator = Allocator::default();
    parse(&allocator, source, kind, output).map(|_| ())
}

/// Minify `source` as `kind`.
///
/// Top-level names are not mangled, so exported bindings keep their names.
/// The printer chooses delimiters by length, so string literals are
/// normalized to single quotes afterwards.
pub fn minify(source: &str, kind: ModuleKind, output: &str) -> Result<String> {
    let allocator = Allocator::default();
    let ret = parse(&allocator, source, kind, output)?;

    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;

    single_quote_strings(&code, kind, output)
}

/// Syntax-check `source` and minify it when `minify` is set.
pub fn transform(source: &str, kind: ModuleKind, output: &str, minify_output: bool) -> Result<String> {
    if minify_output {
        minify(source, kind, output)
    } else {
        check_syntax(source, kind, output)?;
        Ok(source.to_string())
    }
}
