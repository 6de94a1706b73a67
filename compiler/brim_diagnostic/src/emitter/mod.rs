//! Rendering diagnostics for people and for tools.
//!
//! The terminal emitter writes one short block per diagnostic followed by
//! an error count. The JSON emitter writes a single array of flat objects.

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use std::io;

use crate::Diagnostic;

/// An output format for a batch of diagnostics.
///
/// A batch is any number of `emit` calls closed by one `finish`.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// Close the batch and flush. `error_count` counts the batch's
    /// `Error`-severity entries.
    fn finish(&mut self, error_count: usize);
}

/// Write `text` as a quoted JSON string.
///
/// Unescaped runs are copied through in one write.
pub(crate) fn write_json_str(out: &mut impl io::Write, text: &str) -> io::Result<()> {
    out.write_all(b"\"")?;
    let mut run_start = 0;
    for (at, c) in text.char_indices() {
        let escape = match c {
            '"' => Some("\\\""),
            '\\' => Some("\\\\"),
            '\n' => Some("\\n"),
            '\r' => Some("\\r"),
            '\t' => Some("\\t"),
            c if c.is_control() => None,
            _ => continue,
        };
        out.write_all(text[run_start..at].as_bytes())?;
        match escape {
            Some(escape) => out.write_all(escape.as_bytes())?,
            None => write!(out, "\\u{:04x}", u32::from(c))?,
        }
        run_start = at + c.len_utf8();
    }
    out.write_all(text[run_start..].as_bytes())?;
    out.write_all(b"\"")
}
