//! JSON projection of a CEF event record.

use cefline_proto::{CefError, CefEvent};
use thiserror::Error;

/// Errors from exporting a record as JSON.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The record failed mandatory-field validation.
    #[error(transparent)]
    Invalid(#[from] CefError),

    /// The record could not be serialized.
    #[error("unable to serialize the CEF event")]
    Serialize(#[from] serde_json::Error),
}

/// Serialize a validated record as a JSON object.
///
/// Field order follows the wire order (`Version` through `Severity`, then
/// `Extensions`); `Extensions` is omitted when empty. The record is
/// serialized as-is, with no escaping applied: JSON carries the field
/// values verbatim, so this projection is independent of the CEF line
/// format.
pub fn to_json(event: &CefEvent) -> Result<String, ExportError> {
    event.validate()?;
    Ok(serde_json::to_string(event)?)
}
