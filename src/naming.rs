//! Slug and export-name derivation.
//!
//! Slugs are lowercase ASCII alphanumerics derived from an icon title.
//! Export names are JavaScript identifiers derived from a slug.

use deunicode::deunicode_char;

/// Characters with a spelled-out slug form, checked before transliteration.
const SLUG_REPLACEMENTS: &[(char, &str)] = &[
    ('+', "plus"),
    ('.', "dot"),
    ('&', "and"),
    ('đ', "d"),
    ('ħ', "h"),
    ('ı', "i"),
    ('ĸ', "k"),
    ('ŀ', "l"),
    ('ł', "l"),
    ('ß', "ss"),
    ('ŧ', "t"),
];

/// Derive a slug from an icon title.
///
/// `"Test Icon"` -> `"testicon"`, `"C++"` -> `"cplusplus"`, `"Dot.js"` -> `"dotdotjs"`.
pub fn title_to_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for ch in title.to_lowercase().chars() {
        if let Some((_, replacement)) = SLUG_REPLACEMENTS.iter().find(|(c, _)| *c == ch) {
            slug.push_str(replacement);
            continue;
        }

        let ascii = if ch.is_ascii() {
            ch.to_string()
        } else {
            deunicode_char(ch).unwrap_or("").to_lowercase()
        };

        slug.extend(
            ascii
                .chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
        );
    }

    slug
}

/// Derive the export name for a slug.
///
/// The slug is split on every character that is not ASCII alphanumeric, each
/// word is capitalized and the words are joined behind `prefix`:
/// `("dot-net", "si")` -> `"siDotNet"`.
pub fn slug_to_identifier(slug: &str, prefix: &str) -> String {
    let mut ident = String::with_capacity(prefix.len() + slug.len());
    ident.extend(prefix.chars().filter(|c| is_identifier_char(*c)));

    for word in slug
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            ident.push(first.to_ascii_uppercase());
            ident.push_str(chars.as_str());
        }
    }

    match ident.chars().next() {
        None => "_".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{}", ident),
        Some(_) => ident,
    }
}

/// Whether `slug` is safe as a file stem and an index key: non-empty
/// lowercase ASCII alphanumerics, `-` and `_`.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Check that `name` is a plain ASCII JavaScript identifier.
///
/// Reserved words are not rejected; generated names always start with a
/// prefix or an uppercase letter, so they can never spell one.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => chars.all(is_identifier_char),
        _ => false,
    }
}
