//! String escaping for single-quoted JavaScript literals.

/// Quote character delimiting every generated string literal.
pub const DELIMITER: char = '\'';

/// Backslash-escape every delimiter that is not already escaped.
///
/// A delimiter preceded by a backslash is left alone, which makes the
/// function idempotent: `escape(&escape(s)) == escape(s)`.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev = None;

    for ch in value.chars() {
        if ch == DELIMITER && prev != Some('\\') {
            out.push('\\');
        }
        out.push(ch);
        prev = Some(ch);
    }

    out
}

/// Render `value` as a complete single-quoted literal.
pub fn quote(value: &str) -> String {
    format!("{DELIMITER}{}{DELIMITER}", escape(value))
}
