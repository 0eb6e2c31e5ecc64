//! Error types for CEF encoding and decoding.

use thiserror::Error;

/// Convenience alias for codec results.
pub type Result<T> = std::result::Result<T, CefError>;

/// Errors produced while encoding or decoding a CEF line.
///
/// Every failure is a returned value; the codec never panics and never
/// emits partial output alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CefError {
    /// A mandatory header field is empty. Raised by validation before
    /// encoding and again after decoding.
    #[error("mandatory CEF field `{0}` is empty")]
    MissingMandatoryField(&'static str),

    /// The leading version token of a decoded line is not a base-10
    /// non-negative integer. Carries the offending token.
    #[error("CEF version token `{0}` is not a base-10 integer")]
    InvalidVersion(String),

    /// The decoded line does not start with the literal `CEF:` prefix.
    #[error("line does not start with the `CEF:` prefix")]
    NotACefMessage,
}
