//! Event record to CEF line.

use crate::errors::Result;
use crate::event::CefEvent;

/// Encode a raw event record into a single CEF line.
///
/// Validation runs first; an incomplete record produces
/// [`crate::CefError::MissingMandatoryField`] and no output. The six
/// string header fields receive header escaping, the version is formatted
/// as a plain decimal integer, and every extension key and value receives
/// extension escaping. Extension pairs are emitted sorted by escaped key,
/// so the same logical record always encodes to byte-identical output no
/// matter how the caller's map iterates.
///
/// The trailing `|` before the extension segment is always present, even
/// when there are no extensions: a CEF line has eight pipe-delimited
/// fields after the prefix, the eighth possibly empty.
///
/// The record must hold raw (unescaped) values. Encoding a record that
/// came out of [`crate::decode`] escapes its fields a second time.
pub fn encode(event: &CefEvent) -> Result<String> {
    event.validate()?;
    let event = event.clone().escape_fields();

    // BTreeMap iteration is already ascending by escaped key.
    let extensions = event
        .extensions
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(" ");

    Ok(format!(
        "CEF:{}|{}|{}|{}|{}|{}|{}|{}",
        event.version,
        event.device_vendor,
        event.device_product,
        event.device_version,
        event.device_event_class_id,
        event.name,
        event.severity,
        extensions,
    ))
}
