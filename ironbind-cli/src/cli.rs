//! Command-line argument parsing and definitions.
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// IronBind - native interop binding generator.
///
/// Reads a declarative JSON description of a native library's class
/// surface and emits safe C# wrapper source units.
#[derive(Parser, Debug)]
#[command(
    name = "ironbind",
    version,
    about,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate wrapper source units from an interop schema
    Generate(GenerateArgs),

    /// Parse and validate an interop schema without writing output
    Check(CheckArgs),
}

/// Arguments for the generate command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the interop schema JSON file
    #[arg(short, long, value_name = "FILE")]
    pub schema: PathBuf,

    /// Directory the generated units are written to (created if missing)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Namespace wrapping the generated classes
    #[arg(short, long, value_name = "NAMESPACE")]
    pub namespace: Option<String>,
}

/// Arguments for the check command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the interop schema JSON file
    #[arg(short, long, value_name = "FILE")]
    pub schema: PathBuf,
}
