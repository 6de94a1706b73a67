#![allow(clippy::unwrap_used, clippy::expect_used)]

mod recovery;

use brim_diagnostic::DiagnosticCode;
use brim_lexer::SourceText;

use crate::{parse_module, Module};

pub(crate) fn parse(text: &str) -> (SourceText, Module) {
    let source = SourceText::new(text);
    let module = parse_module(&source);
    (source, module)
}

pub(crate) fn codes(module: &Module) -> Vec<DiagnosticCode> {
    module.diagnostics.iter().map(|d| d.code).collect()
}

pub(crate) fn names(source: &SourceText, module: &Module) -> Vec<String> {
    module
        .members
        .iter()
        .map(|decl| source.text(&decl.name).to_owned())
        .collect()
}
