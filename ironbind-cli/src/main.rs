//! IronBind CLI - generate safe native-interop wrapper units.
//!
//! Entry point for the `ironbind` binary: parses arguments, initializes
//! logging, dispatches the subcommand, and maps the result to a process
//! exit code. Exit 0 means a run with no fatal diagnostics; exit 1 means
//! at least one class failed to emit; exit 2 is an operational error
//! (unreadable schema, unwritable output directory).

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use std::process;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Generate(args) => commands::generate(args),
        Commands::Check(args) => commands::check(args),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(2);
        }
    }
}

/// Initializes tracing with an env-filter; `-v` flags raise the default
/// level, `RUST_LOG` overrides it entirely.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
