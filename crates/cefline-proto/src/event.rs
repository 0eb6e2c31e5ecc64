//! The CEF event record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CefError, Result};
use crate::escape::{escape_extension_field, escape_header_field};

/// A single Common Event Format record.
///
/// Seven mandatory header fields plus an open extension map. The record is
/// a plain value type; construct it literally or obtain one from
/// [`crate::decode`], and turn it into wire text with [`crate::encode`].
///
/// Field values are held exactly as given. Whether they are raw text or
/// already-escaped wire text is a property of where the record came from,
/// not of the type: records built by hand are raw, records produced by
/// [`crate::decode`] are escaped.
///
/// The serde projection uses the CEF header names (`Version`,
/// `DeviceVendor`, ...) so a serialized record matches the field naming of
/// the wire format; `Extensions` is omitted when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CefEvent {
    /// CEF syntax revision the record conforms to. Zero is the first
    /// published revision and is a valid value.
    pub version: u32,

    /// Vendor of the device that produced the event.
    pub device_vendor: String,

    /// Product that produced the event.
    pub device_product: String,

    /// Version of the producing product.
    pub device_version: String,

    /// Event type identifier, unique per event type within the product.
    pub device_event_class_id: String,

    /// Human-readable description of the event.
    pub name: String,

    /// Importance of the event, as free text (the CEF dictionary allows
    /// both words and digits here; neither is enforced).
    pub severity: String,

    /// Open `key=value` extension pairs. Unordered on input; the encoder
    /// emits them sorted by escaped key.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, String>,
}

/// Mandatory string header fields, paired with their wire names for error
/// reporting. `version` is mandatory too but is present by construction
/// (any `u32`, including zero, counts as set).
const MANDATORY_FIELDS: [(&str, fn(&CefEvent) -> &str); 6] = [
    ("deviceVendor", |e| e.device_vendor.as_str()),
    ("deviceProduct", |e| e.device_product.as_str()),
    ("deviceVersion", |e| e.device_version.as_str()),
    ("deviceEventClassId", |e| e.device_event_class_id.as_str()),
    ("name", |e| e.name.as_str()),
    ("severity", |e| e.severity.as_str()),
];

impl CefEvent {
    /// Check that every mandatory header field is non-empty.
    ///
    /// The field set is closed and known, so this is a fixed enumerated
    /// check; the error names the first empty field in wire order.
    pub fn validate(&self) -> Result<()> {
        for (name, accessor) in MANDATORY_FIELDS {
            if accessor(self).is_empty() {
                return Err(CefError::MissingMandatoryField(name));
            }
        }
        Ok(())
    }

    /// Validate the record and return a copy with every field escaped for
    /// the wire: header escaping on the six string header fields,
    /// extension escaping on every extension key and value.
    ///
    /// Two distinct raw keys can collapse to the same escaped key; the
    /// later one (in raw key order) wins. Escaping is not idempotent, so
    /// call this at most once per logical record.
    pub fn escaped(&self) -> Result<Self> {
        self.validate()?;
        Ok(self.clone().escape_fields())
    }

    /// Escape all fields in place, without validating. Decode uses this
    /// directly because it escapes first and validates after.
    pub(crate) fn escape_fields(mut self) -> Self {
        self.device_vendor = escape_header_field(&self.device_vendor);
        self.device_product = escape_header_field(&self.device_product);
        self.device_version = escape_header_field(&self.device_version);
        self.device_event_class_id = escape_header_field(&self.device_event_class_id);
        self.name = escape_header_field(&self.name);
        self.severity = escape_header_field(&self.severity);

        self.extensions = self
            .extensions
            .iter()
            .map(|(k, v)| (escape_extension_field(k), escape_extension_field(v)))
            .collect();

        self
    }
}
