//! `brim lex`: one line per token.

use std::io::Write;

use brim_diagnostic::Diagnostic;
use brim_lexer::{lex_raw_with, lex_significant_with, SourceText};

use crate::{CliError, Options};

pub(super) fn run(
    source: &SourceText,
    options: &Options,
    out: &mut impl Write,
) -> Result<Vec<Diagnostic>, CliError> {
    let lex_options = options.lex_options();
    let output = if options.significant {
        lex_significant_with(source, &lex_options)
    } else {
        lex_raw_with(source, &lex_options)
    };
    for token in &output.tokens {
        let kind = format!("{:?}", token.kind);
        writeln!(
            out,
            "{kind:<16} {}:{} {:?}",
            token.line,
            token.column,
            source.text(token)
        )?;
    }
    Ok(output.diagnostics)
}
