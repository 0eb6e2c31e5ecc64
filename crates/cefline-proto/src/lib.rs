//! Wire format for ArcSight Common Event Format (CEF) lines.
//!
//! A CEF line is a single pipe-delimited record: a `CEF:` prefix, seven
//! fixed header fields, and a trailing segment of space-separated
//! `key=value` extension pairs:
//!
//! ```text
//! CEF:0|Cool Vendor|Cool Product|1.0|COOL_THING|Something cool happened.|Unknown|src=127.0.0.1
//! ```
//!
//! This crate implements the structural transform only. Header fields are
//! checked for non-emptiness before encoding, but the per-field length and
//! type constraints of the full CEF specification (and its extension
//! dictionary) are deliberately not enforced.
//!
//! # Escaping discipline
//!
//! Escaping is applied exactly once per round trip. [`encode`] expects raw
//! (unescaped) field values and escapes them itself; [`decode`] escapes the
//! tokens it splits out of the line, so a decoded event always holds wire
//! text, not raw text. Feeding a decoded event straight back into
//! [`encode`] therefore double-escapes any special characters. See
//! [`decode`] for why this asymmetry is kept.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod decode;
pub mod encode;
pub mod errors;
pub mod escape;
pub mod event;

pub use decode::decode;
pub use encode::encode;
pub use errors::{CefError, Result};
pub use escape::{escape_extension_field, escape_header_field};
pub use event::CefEvent;
