//! Per-field escaping for CEF header and extension text.
//!
//! Both functions perform a single left-to-right pass, so characters
//! introduced by a replacement are never re-examined. That makes escaping
//! deliberately non-idempotent: applying it twice double-escapes. Callers
//! apply it exactly once per round trip ([`crate::encode`] escapes raw
//! input, [`crate::decode`] escapes once after splitting the line).

/// Escape a header field value.
///
/// Header fields are pipe-delimited on the wire, so `|` must be escaped in
/// addition to the backslash itself. A literal newline becomes the
/// two-character sequence `\n` to keep the record on one line.
///
/// ```
/// use cefline_proto::escape_header_field;
///
/// assert_eq!(escape_header_field(""), "");
/// assert_eq!(escape_header_field(r"a|b\c"), r"a\|b\\c");
/// ```
pub fn escape_header_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for ch in field.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '|' => out.push_str("\\|"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape an extension key or value.
///
/// Extension pairs are `key=value` tokens, so `=` must be escaped; the
/// pipe is not a delimiter inside the extension segment and is left alone.
pub fn escape_extension_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for ch in field.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '=' => out.push_str("\\="),
            _ => out.push(ch),
        }
    }
    out
}
