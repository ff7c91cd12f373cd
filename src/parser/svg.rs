//! SVG path extraction.
//!
//! Icons are single-colour glyphs, so all that codegen needs from the SVG is
//! the `d` data of its `<path>` elements.

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

/// Reasons path data could not be extracted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SvgError {
    #[error("malformed SVG at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    #[error("no <path> element with a `d` attribute")]
    NoPath,

    #[error("path data is empty")]
    EmptyPath,
}

/// Remove `\r` and `\n` from SVG markup.
pub fn strip_line_breaks(svg: &str) -> String {
    svg.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

/// Extract the path data of every `<path>` element, joined by a space.
pub fn extract_path(svg: &str) -> Result<String, SvgError> {
    let mut reader = Reader::from_str(svg);
    let mut segments: Vec<String> = Vec::new();
    let mut saw_path = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(elem) | Event::Empty(elem)) if elem.local_name().as_ref() == b"path" => {
                let attr = elem
                    .try_get_attribute("d")
                    .map_err(|e| SvgError::Malformed {
                        position: reader.error_position(),
                        message: e.to_string(),
                    })?;

                if let Some(attr) = attr {
                    saw_path = true;
                    let raw = std::str::from_utf8(&attr.value).map_err(|e| SvgError::Malformed {
                        position: reader.buffer_position(),
                        message: e.to_string(),
                    })?;
                    let value = quick_xml::escape::unescape(raw).map_err(|e| SvgError::Malformed {
                        position: reader.buffer_position(),
                        message: e.to_string(),
                    })?;
                    let trimmed = value.trim();
                    if !trimmed.is_empty() {
                        segments.push(trimmed.to_string());
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(SvgError::Malformed {
                    position: reader.error_position(),
                    message: e.to_string(),
                })
            }
        }
    }

    if segments.is_empty() {
        return Err(if saw_path {
            SvgError::EmptyPath
        } else {
            SvgError::NoPath
        });
    }

    Ok(segments.join(" "))
}
