//! Line-oriented sink for encoded CEF events.

use std::io::{self, Stderr, Stdout, Write};

use cefline_proto::{CefError, CefEvent, encode};
use thiserror::Error;
use tracing::warn;

/// Errors from emitting an event through a [`CefSink`].
///
/// `Encode` means the message could not be built at all; `Io` means the
/// message was built but could not be written. Callers that only care
/// about delivery can treat both the same, but the split keeps "bad
/// record" distinguishable from "bad stream".
#[derive(Debug, Error)]
pub enum EmitError {
    /// The record failed validation and no line was produced.
    #[error("unable to encode the CEF message")]
    Encode(#[from] CefError),

    /// The encoded line could not be written to the output stream.
    #[error("unable to write the CEF message")]
    Io(#[from] io::Error),
}

/// Writes encoded CEF lines to an output stream, and failure notices to a
/// separate error stream.
///
/// Both streams are owned by the sink and supplied at construction. The
/// stdout/stderr pairing of [`CefSink::stdio`] suits containerized
/// collectors that scrape the standard streams; tests hand in byte
/// buffers instead.
#[derive(Debug)]
pub struct CefSink<W, E> {
    out: W,
    err: E,
}

impl CefSink<Stdout, Stderr> {
    /// Sink that emits lines to stdout and failure notices to stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> CefSink<W, E> {
    /// Build a sink over explicit output and error streams.
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    /// Encode `event` and write the line, newline-terminated, to the
    /// output stream.
    ///
    /// If encoding fails, a generic notice goes to the error stream on a
    /// best-effort basis (a failed notice write is not reported) and the
    /// encode error is returned. A successful encode followed by a failed
    /// write returns [`EmitError::Io`].
    pub fn emit(&mut self, event: &CefEvent) -> Result<(), EmitError> {
        let line = match encode(event) {
            Ok(line) => line,
            Err(source) => {
                warn!(error = %source, "unable to encode the CEF message");
                let _ = writeln!(self.err, "unable to create and thereby log the CEF message");
                return Err(source.into());
            },
        };

        writeln!(self.out, "{line}")?;
        Ok(())
    }

    /// Consume the sink and hand back its streams.
    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }
}
