//! CEF line to event record.

use std::collections::BTreeMap;

use crate::errors::{CefError, Result};
use crate::event::CefEvent;

/// Decode a single CEF line into an event record.
///
/// The line must start with the literal `CEF:` prefix
/// ([`CefError::NotACefMessage`] otherwise) and its first pipe-delimited
/// token must parse as a base-10 non-negative integer
/// ([`CefError::InvalidVersion`] otherwise). Header segments two through
/// seven are taken verbatim; missing segments decode as empty strings and
/// fail the final mandatory-field validation.
///
/// An eighth segment, if present, is the extension segment: it is split on
/// single spaces, each token on its first `=`. Tokens without an `=` are
/// silently dropped rather than failing the decode, later duplicate keys
/// overwrite earlier ones, and an unescaped `=` inside a value truncates
/// it (splitting on the first occurrence is deliberate). Segments beyond
/// the eighth are ignored.
///
/// The decoded fields are then escaped exactly as [`crate::encode`] would
/// escape raw input, so the returned record holds wire text. This mirrors
/// the encode path's assumption that its input is raw: a line whose fields
/// contain literal unescaped special characters decodes to a
/// further-escaped variant rather than round-tripping, and re-encoding a
/// decoded record double-escapes. Downstream consumers depend on the
/// escaped convention, so the asymmetry is kept and tested rather than
/// fixed here.
pub fn decode(line: &str) -> Result<CefEvent> {
    let Some(rest) = line.strip_prefix("CEF:") else {
        return Err(CefError::NotACefMessage);
    };

    let segments: Vec<&str> = rest.split('|').collect();

    // split always yields at least one segment, possibly empty.
    let version_token = segments[0];
    let version: u32 = version_token
        .parse()
        .map_err(|_| CefError::InvalidVersion(version_token.to_string()))?;

    let header = |index: usize| segments.get(index).copied().unwrap_or("").to_string();

    let mut extensions = BTreeMap::new();
    if let Some(segment) = segments.get(7) {
        for token in segment.split(' ') {
            if let Some((key, value)) = token.split_once('=') {
                extensions.insert(key.to_string(), value.to_string());
            }
        }
    }

    let event = CefEvent {
        version,
        device_vendor: header(1),
        device_product: header(2),
        device_version: header(3),
        device_event_class_id: header(4),
        name: header(5),
        severity: header(6),
        extensions,
    }
    .escape_fields();

    event.validate()?;
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "CEF:0|Cool Vendor|Cool Product|1.0|COOL_THING|\
                        Something cool happened.|Unknown|src=127.0.0.1";

    #[test]
    fn decodes_the_reference_line() {
        let expected = CefEvent {
            version: 0,
            device_vendor: "Cool Vendor".to_string(),
            device_product: "Cool Product".to_string(),
            device_version: "1.0".to_string(),
            device_event_class_id: "COOL_THING".to_string(),
            name: "Something cool happened.".to_string(),
            severity: "Unknown".to_string(),
            extensions: BTreeMap::from([("src".to_string(), "127.0.0.1".to_string())]),
        };
        assert_eq!(decode(LINE), Ok(expected));
    }

    #[test]
    fn rejects_lines_without_the_prefix() {
        assert_eq!(decode("This should definitely fail."), Err(CefError::NotACefMessage));
        // The prefix check is case-sensitive and anchored.
        assert_eq!(decode(" CEF:0|a|b|c|d|e|f|"), Err(CefError::NotACefMessage));
        assert_eq!(decode("cef:0|a|b|c|d|e|f|"), Err(CefError::NotACefMessage));
    }

    #[test]
    fn rejects_non_numeric_version() {
        assert_eq!(
            decode("CEF:x|a|b|c|d|e|f|"),
            Err(CefError::InvalidVersion("x".to_string()))
        );
        assert_eq!(
            decode("CEF:-1|a|b|c|d|e|f|"),
            Err(CefError::InvalidVersion("-1".to_string()))
        );
    }

    #[test]
    fn short_lines_fail_mandatory_validation() {
        assert_eq!(decode("CEF:0"), Err(CefError::MissingMandatoryField("deviceVendor")));
        assert_eq!(
            decode("CEF:0|vendor|product"),
            Err(CefError::MissingMandatoryField("deviceVersion"))
        );
    }

    #[test]
    fn missing_extension_segment_decodes_to_empty_map() {
        let event = decode("CEF:0|a|b|c|d|e|f");
        assert!(event.is_ok_and(|e| e.extensions.is_empty()));
    }

    #[test]
    fn empty_extension_segment_decodes_to_empty_map() {
        let event = decode("CEF:0|a|b|c|d|e|f|");
        assert!(event.is_ok_and(|e| e.extensions.is_empty()));
    }

    #[test]
    fn tokens_without_equals_are_dropped() {
        let event = decode("CEF:0|a|b|c|d|e|f|src=127.0.0.1 garbage dst=10.0.0.1");
        let expected = BTreeMap::from([
            ("src".to_string(), "127.0.0.1".to_string()),
            ("dst".to_string(), "10.0.0.1".to_string()),
        ]);
        assert!(event.is_ok_and(|e| e.extensions == expected));
    }

    #[test]
    fn later_duplicate_keys_win() {
        let event = decode("CEF:0|a|b|c|d|e|f|src=first src=second");
        assert!(event.is_ok_and(|e| {
            e.extensions.get("src").map(String::as_str) == Some("second")
        }));
    }

    #[test]
    fn value_splits_on_first_equals_only() {
        // An unescaped `=` in the value survives into the value text; the
        // re-escape pass then escapes it.
        let event = decode("CEF:0|a|b|c|d|e|f|query=a=b");
        assert!(event.is_ok_and(|e| {
            e.extensions.get("query").map(String::as_str) == Some("a\\=b")
        }));
    }

    #[test]
    fn decoded_fields_are_escaped_once() {
        // Raw backslash in a header segment comes back doubled.
        let event = decode("CEF:0|Back\\slash|b|c|d|e|f|");
        assert!(event.is_ok_and(|e| e.device_vendor == "Back\\\\slash"));
    }

    #[test]
    fn segments_beyond_the_eighth_are_ignored() {
        let event = decode("CEF:0|a|b|c|d|e|f|src=1|tail=2");
        assert!(event.is_ok_and(|e| {
            e.extensions.len() == 1 && e.extensions.contains_key("src")
        }));
    }
}
