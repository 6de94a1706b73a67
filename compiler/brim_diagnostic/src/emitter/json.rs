//! JSON Emitter
//!
//! Machine-readable diagnostic output: one JSON array of flat objects.

use std::io::{self, Write};

use crate::Diagnostic;

use super::{write_json_str, DiagnosticEmitter};

/// JSON emitter for machine-readable output.
///
/// `begin` opens the array and `finish` closes it; an empty batch renders
/// as `[]`.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
        }
    }

    pub fn begin(&mut self) {
        let _ = write!(self.writer, "[");
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_entry(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        let w = &mut self.writer;
        write!(
            w,
            "  {{\"code\": \"{}\", \"severity\": \"{}\", \"phase\": \"{}\", \"message\": ",
            diagnostic.code.as_str(),
            diagnostic.severity,
            diagnostic.phase,
        )?;
        write_json_str(w, &diagnostic.message())?;
        write!(
            w,
            ", \"offset\": {}, \"length\": {}, \"line\": {}, \"column\": {}, \"actual\": ",
            diagnostic.offset, diagnostic.length, diagnostic.line, diagnostic.column,
        )?;
        match diagnostic.actual {
            Some(kind) => write_json_str(w, kind.name())?,
            None => w.write_all(b"null")?,
        }
        w.write_all(b", \"expected\": [")?;
        for (i, kind) in diagnostic.expected.iter().enumerate() {
            if i > 0 {
                w.write_all(b", ")?;
            }
            write_json_str(w, kind.name())?;
        }
        w.write_all(b"]}")
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let separator = if self.first { "\n" } else { ",\n" };
        self.first = false;
        let _ = self.writer.write_all(separator.as_bytes());
        let _ = self.write_entry(diagnostic);
    }

    /// The array carries its own count, so only the closing bracket goes out.
    fn finish(&mut self, _error_count: usize) {
        let close = if self.first { "]\n" } else { "\n]\n" };
        let _ = self.writer.write_all(close.as_bytes());
        let _ = self.writer.flush();
    }
}
