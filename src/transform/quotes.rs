//! Normalizes string literals in printed code to single quotes.
//!
//! oxc's printer picks the shortest delimiter per literal when minifying,
//! which mixes `"`, `'` and backticks. Every plain string literal and every
//! untagged template literal without substitutions is rewritten as a
//! single-quoted literal. Directives are left as printed.

use oxc::allocator::Allocator;
use oxc::ast::ast::{Directive, StringLiteral, TaggedTemplateExpression, TemplateLiteral};
use oxc::ast_visit::{walk, Visit};
use oxc::span::Span;

use crate::codegen::escape::DELIMITER;
use crate::error::Result;

use super::{parse, ModuleKind};

/// Rewrite every eligible literal in `source` with single quotes.
pub fn single_quote_strings(source: &str, kind: ModuleKind, output: &str) -> Result<String> {
    let allocator = Allocator::default();
    let ret = parse(&allocator, source, kind, output)?;

    let mut collector = LiteralCollector::default();
    collector.visit_program(&ret.program);

    let mut edits = collector.edits;
    edits.sort_by_key(|(span, _)| span.start);

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for (span, replacement) in edits {
        let (start, end) = (span.start as usize, span.end as usize);
        if start < cursor {
            continue;
        }
        out.push_str(&source[cursor..start]);
        out.push_str(&replacement);
        cursor = end;
    }
    out.push_str(&source[cursor..]);

    Ok(out)
}

/// Render `value` as a single-quoted literal, escaping what the literal
/// cannot hold verbatim.
pub fn single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(DELIMITER);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            DELIMITER => {
                out.push('\\');
                out.push(DELIMITER);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(DELIMITER);
    out
}

#[derive(Default)]
struct LiteralCollector {
    edits: Vec<(Span, String)>,
}

impl<'a> Visit<'a> for LiteralCollector {
    fn visit_directive(&mut self, _it: &Directive<'a>) {}

    fn visit_string_literal(&mut self, it: &StringLiteral<'a>) {
        if it.lone_surrogates {
            return;
        }
        self.edits.push((it.span, single_quoted(it.value.as_str())));
    }

    fn visit_template_literal(&mut self, it: &TemplateLiteral<'a>) {
        if it.expressions.is_empty() && it.quasis.len() == 1 {
            if let Some(cooked) = it.quasis.first().and_then(|q| q.value.cooked.as_ref()) {
                self.edits.push((it.span, single_quoted(cooked.as_str())));
                return;
            }
        }
        walk::walk_template_literal(self, it);
    }

    fn visit_tagged_template_expression(&mut self, it: &TaggedTemplateExpression<'a>) {
        // The quasi of a tagged template is passed raw to the tag.
        self.visit_expression(&it.tag);
        self.visit_expressions(&it.quasi.expressions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn requote(source: &str) -> String {
        single_quote_strings(source, ModuleKind::EsModule, "icons.mjs").unwrap()
    }

    #[test]
    fn test_double_quotes_become_single() {
        assert_eq!(requote(r#"export const a={b:"c"};"#), "export const a={b:'c'};");
    }

    #[test]
    fn test_plain_template_becomes_single() {
        assert_eq!(requote("export const a={b:`M0 0h10v10z`};"), "export const a={b:'M0 0h10v10z'};");
    }

    #[test]
    fn test_apostrophe_escaped() {
        assert_eq!(
            requote(r#"export const a={title:"McDonald's"};"#),
            r"export const a={title:'McDonald\'s'};"
        );
    }

    #[test]
    fn test_template_with_newline() {
        assert_eq!(requote("const a=`x\ny`;"), r"const a='x\ny';");
    }

    #[test]
    fn test_keys_and_import_sources() {
        assert_eq!(
            requote(r#"import{x as e}from"./utils.mjs";e({"dot-net":1});"#),
            "import{x as e}from'./utils.mjs';e({'dot-net':1});"
        );
    }

    #[test]
    fn test_substitutions_and_tags_untouched() {
        let source = "const a=`${b}!`,c=t`raw\\n`;";
        assert_eq!(requote(source), source);
    }

    #[test]
    fn test_strings_inside_substitutions() {
        assert_eq!(requote(r#"const a=`${"b"}!`;"#), "const a=`${'b'}!`;");
    }

    #[test]
    fn test_directive_untouched() {
        let out = single_quote_strings(r#""use strict";f("a");"#, ModuleKind::CommonJs, "utils.js").unwrap();
        assert_eq!(out, r#""use strict";f('a');"#);
    }

    #[test]
    fn test_single_quoted_escapes() {
        assert_eq!(single_quoted(r"a\b"), r"'a\\b'");
        assert_eq!(single_quoted("\u{0}"), r"'\x00'");
        assert_eq!(single_quoted("\u{2028}"), r"'\u2028'");
    }
}
