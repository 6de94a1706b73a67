//! `brim check`: parse and keep only the diagnostics.

use brim_diagnostic::Diagnostic;
use brim_lexer::SourceText;
use brim_parse::parse_module_with;

use crate::Options;

pub(super) fn run(source: &SourceText, options: &Options) -> Vec<Diagnostic> {
    parse_module_with(source, &options.parse_options()).diagnostics
}
