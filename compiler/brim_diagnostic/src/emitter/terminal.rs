//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const LOCATION: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color` value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
///
/// Each diagnostic renders as
///
/// ```text
/// error[parse]: unexpected `,`, expected identifier
///   --> shapes.brim:3:7 [E1001]
/// ```
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            path: None,
        }
    }

    /// Prefix locations with a file name.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Unwrap the writer, mostly for tests.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        self.write_colored(&severity.to_string(), color);
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[phase]: message
        self.write_severity(diagnostic.severity);
        let _ = writeln!(
            self.writer,
            "[{}]: {}",
            diagnostic.phase,
            diagnostic.message()
        );

        // Location: --> path:line:column [CODE]
        let location = match &self.path {
            Some(path) => format!("{path}:{}:{}", diagnostic.line, diagnostic.column),
            None => format!("{}:{}", diagnostic.line, diagnostic.column),
        };
        let _ = write!(self.writer, "  --> ");
        self.write_colored(&location, colors::LOCATION);
        let _ = writeln!(self.writer, " [{}]", diagnostic.code.as_str());
    }

    /// Print `error: N errors found` when there were any, then flush.
    fn finish(&mut self, error_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let _ = writeln!(
                self.writer,
                ": {error_count} error{} found",
                plural_s(error_count)
            );
        }
        let _ = self.writer.flush();
    }
}
