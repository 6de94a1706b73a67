//! Command-line parsing.
//!
//! Hand-rolled: one command word, one input, and a handful of
//! `--flag[=value]` options in any order.

use std::path::PathBuf;

use brim_diagnostic::emitter::ColorMode;
use brim_diagnostic::DiagnosticSink;
use brim_lexer::{LexOptions, TriviaPolicy};
use brim_parse::ParseOptions;

use crate::CliError;

pub const USAGE: &str = "\
Usage: brim <command> <file|-> [options]

Commands:
  lex <file>      Print every token as `kind line:col \"text\"`
  parse <file>    Print the module header and declaration list
  check <file>    Print diagnostics only
  help            Show this help message
  version         Show version information

Options:
  --significant        lex: drop whitespace and comments
  --keep-trivia        parse: report collected trivia
  --color=<mode>       auto (default), always, never
  --format=<format>    human (default), json
  --error-limit=<n>    Stop recording after n diagnostics (0 = no limit)

Use `-` as the file to read from stdin. Exit status is 0 when clean,
1 when any diagnostic was reported and 2 on usage or I/O errors.
";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Lex,
    Parse,
    Check,
    Help,
    Version,
}

impl Command {
    fn parse(word: &str) -> Option<Self> {
        match word {
            "lex" => Some(Command::Lex),
            "parse" => Some(Command::Parse),
            "check" => Some(Command::Check),
            "help" | "--help" | "-h" => Some(Command::Help),
            "version" | "--version" | "-V" => Some(Command::Version),
            _ => None,
        }
    }

    fn needs_input(self) -> bool {
        matches!(self, Command::Lex | Command::Parse | Command::Check)
    }
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Human,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    pub input: Input,
    pub color: ColorMode,
    pub format: Format,
    pub error_limit: usize,
    pub keep_trivia: bool,
    pub significant: bool,
}

impl Options {
    /// Parse arguments, excluding the program name.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let Some((word, rest)) = args.split_first() else {
            return Ok(Options::new(Command::Help));
        };
        let command = Command::parse(word)
            .ok_or_else(|| CliError::Usage(format!("unknown command `{word}`")))?;
        let mut options = Options::new(command);
        let mut input = None;

        for arg in rest {
            if let Some(value) = arg.strip_prefix("--color=") {
                options.color = ColorMode::parse(value).ok_or_else(|| {
                    CliError::Usage(format!("invalid --color value `{value}`"))
                })?;
            } else if let Some(value) = arg.strip_prefix("--format=") {
                options.format = match value {
                    "human" => Format::Human,
                    "json" => Format::Json,
                    _ => {
                        return Err(CliError::Usage(format!(
                            "invalid --format value `{value}`"
                        )))
                    }
                };
            } else if let Some(value) = arg.strip_prefix("--error-limit=") {
                options.error_limit = value.parse().map_err(|_| {
                    CliError::Usage(format!("invalid --error-limit value `{value}`"))
                })?;
            } else if arg == "--keep-trivia" {
                options.keep_trivia = true;
            } else if arg == "--significant" {
                options.significant = true;
            } else if arg == "-" || !arg.starts_with('-') {
                if input.is_some() {
                    return Err(CliError::Usage(format!("unexpected argument `{arg}`")));
                }
                input = Some(if arg == "-" {
                    Input::Stdin
                } else {
                    Input::Path(PathBuf::from(arg))
                });
            } else {
                return Err(CliError::Usage(format!("unknown option `{arg}`")));
            }
        }

        match input {
            Some(input) => options.input = input,
            None if command.needs_input() => {
                return Err(CliError::Usage(format!("`{word}` needs a file or `-`")));
            }
            None => {}
        }
        Ok(options)
    }

    fn new(command: Command) -> Self {
        Options {
            command,
            input: Input::Stdin,
            color: ColorMode::Auto,
            format: Format::Human,
            error_limit: DiagnosticSink::DEFAULT_LIMIT,
            keep_trivia: false,
            significant: false,
        }
    }

    /// `check` has no other output, so its diagnostics go to stdout.
    pub fn diagnostics_to_stdout(&self) -> bool {
        self.command == Command::Check
    }

    pub fn lex_options(&self) -> LexOptions {
        LexOptions {
            diagnostic_limit: self.error_limit,
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            diagnostic_limit: self.error_limit,
            trivia: if self.keep_trivia {
                TriviaPolicy::Collect
            } else {
                TriviaPolicy::Discard
            },
        }
    }
}
