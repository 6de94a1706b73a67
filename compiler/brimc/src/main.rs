//! Brim CLI

use std::io::{self, IsTerminal};

use brimc::{init_tracing, run, Command, Options, Outcome, USAGE};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match Options::parse(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprint!("{USAGE}");
            std::process::exit(err.exit_code());
        }
    };

    match options.command {
        Command::Help => {
            print!("{USAGE}");
            return;
        }
        Command::Version => {
            println!("brim {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Command::Lex | Command::Parse | Command::Check => {}
    }

    let is_tty = if options.diagnostics_to_stdout() {
        io::stdout().is_terminal()
    } else {
        io::stderr().is_terminal()
    };
    let result = run(
        &options,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        is_tty,
    );
    match result {
        Ok(Outcome::Clean) => {}
        Ok(Outcome::Diagnostics) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
