//! Output adapters for CEF event records.
//!
//! The codec in [`cefline_proto`] is pure; this crate owns the
//! side-effecting edges around it:
//!
//! - [`CefSink`]: writes encoded lines to an explicit output stream and a
//!   generic failure notice to an explicit error stream. The streams are
//!   constructor parameters, not global logger state, so concurrent sinks
//!   never contend over a shared destination.
//! - [`to_json`]: re-projects a validated record into JSON with the CEF
//!   header field names.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod json;
pub mod sink;

pub use json::{ExportError, to_json};
pub use sink::{CefSink, EmitError};
