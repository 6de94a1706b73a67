//! Command handlers.
//!
//! Each handler writes its listing to `out` and hands its diagnostics to
//! [`report`], which picks the stream and format.

mod check;
mod lex;
mod parse;

use std::io::{Read, Write};

use brim_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use brim_diagnostic::Diagnostic;
use brim_lexer::SourceText;
use tracing::debug;

use crate::{CliError, Command, Format, Input, Options};

/// How a command finished when it did not fail outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Diagnostics,
}

impl Outcome {
    fn of(diagnostics: &[Diagnostic]) -> Self {
        if diagnostics.is_empty() {
            Outcome::Clean
        } else {
            Outcome::Diagnostics
        }
    }
}

/// Run `options.command` against the given streams.
///
/// `is_tty` describes whichever stream receives diagnostics and only
/// matters for `--color=auto`.
pub fn run(
    options: &Options,
    stdin: impl Read,
    out: &mut impl Write,
    err: &mut impl Write,
    is_tty: bool,
) -> Result<Outcome, CliError> {
    debug!(command = ?options.command, input = ?options.input, "run");
    let source = match &options.input {
        Input::Stdin => SourceText::from_reader("<stdin>", stdin)?,
        Input::Path(path) => SourceText::read(path)?,
    };

    let diagnostics = match options.command {
        Command::Lex => lex::run(&source, options, out)?,
        Command::Parse => parse::run(&source, options, out)?,
        Command::Check => check::run(&source, options),
        Command::Help | Command::Version => Vec::new(),
    };
    out.flush()?;

    if options.diagnostics_to_stdout() {
        report(&diagnostics, &source, options, out, is_tty);
    } else {
        report(&diagnostics, &source, options, err, is_tty);
    }
    Ok(Outcome::of(&diagnostics))
}

/// Render diagnostics in the selected format.
fn report(
    diagnostics: &[Diagnostic],
    source: &SourceText,
    options: &Options,
    writer: &mut impl Write,
    is_tty: bool,
) {
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    match options.format {
        Format::Human => {
            let mut emitter = TerminalEmitter::with_color_mode(writer, options.color, is_tty);
            if let Some(name) = source.name() {
                emitter = emitter.with_path(name);
            }
            emitter.emit_all(diagnostics);
            emitter.finish(errors);
        }
        Format::Json => {
            let mut emitter = JsonEmitter::new(writer);
            emitter.begin();
            emitter.emit_all(diagnostics);
            emitter.finish(errors);
        }
    }
}
