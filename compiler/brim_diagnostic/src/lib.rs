//! Diagnostic system for the Brim front end.
//!
//! - `DiagnosticCode`: stable `E####` identifiers, first digit is the phase
//! - `Diagnostic`: fixed-shape value record (no heap allocation)
//! - `DiagnosticSink`: append-only collector with a hard cap
//! - `emitter`: terminal and JSON rendering
//!
//! Malformed input never produces a Rust error in this pipeline. Every
//! lexical or syntactic problem becomes a `Diagnostic` in the sink and
//! scanning/parsing carries on.

mod code;
mod diagnostic;
pub mod emitter;
mod sink;

pub use code::DiagnosticCode;
pub use diagnostic::{Diagnostic, ExpectedKinds, Phase, Severity};
pub use sink::DiagnosticSink;
