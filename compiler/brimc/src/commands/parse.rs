//! `brim parse`: module header and one line per declaration.

use std::io::Write;

use brim_diagnostic::Diagnostic;
use brim_ir::{Path, Token};
use brim_lexer::SourceText;
use brim_parse::parse_module_with;

use crate::{CliError, Options};

pub(super) fn run(
    source: &SourceText,
    options: &Options,
    out: &mut impl Write,
) -> Result<Vec<Diagnostic>, CliError> {
    let module = parse_module_with(source, &options.parse_options());

    if module.header.is_missing {
        writeln!(out, "module <missing>")?;
    } else {
        writeln!(out, "module {}", path_text(source, &module.header.path))?;
    }
    for decl in &module.members {
        let generics = decl
            .generics
            .as_ref()
            .map(|g| format!("[{}]", join(source, &g.params)))
            .unwrap_or_default();
        writeln!(
            out,
            "{}:{} {:<8} {}{generics}",
            decl.name.line,
            decl.name.column,
            decl.kind().name(),
            source.text(&decl.name),
        )?;
    }
    if options.keep_trivia {
        writeln!(out, "trivia: {} tokens", module.trivia.len())?;
    }
    Ok(module.diagnostics)
}

fn path_text(source: &SourceText, path: &Path) -> String {
    path.segments
        .iter()
        .map(|segment| source.text(segment))
        .collect::<Vec<_>>()
        .join(".")
}

fn join(source: &SourceText, tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| source.text(token))
        .collect::<Vec<_>>()
        .join(", ")
}
