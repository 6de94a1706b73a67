//! Brim command-line front end.
//!
//! The binary is a thin wrapper: [`Options::parse`] reads argv, [`run`]
//! does the work against caller-supplied streams so tests can capture them.

mod commands;
mod options;

use std::io;
use std::sync::Once;

use brim_lexer::SourceError;

pub use commands::{run, Outcome};
pub use options::{Command, Format, Input, Options, USAGE};

/// Failures that stop a command before it produces a result.
///
/// Malformed Brim source is never one of these: it yields diagnostics and
/// [`Outcome::Diagnostics`].
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `BRIM_LOG` or `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = match std::env::var("BRIM_LOG") {
            Ok(directives) => EnvFilter::new(directives),
            Err(_) if std::env::var("RUST_LOG").is_ok() => EnvFilter::from_default_env(),
            Err(_) => return,
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
