//! Command-line interface implementation for debber.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::{DEFAULT_DESCRIPTOR, DEFAULT_OUTPUT_DIR};

/// Command-line arguments structure for debber.
#[derive(Parser, Debug)]
#[command(author, version, about = "debber: simple debian package generator", long_about = None)]
pub struct Args {
    /// Name of the debian config file
    #[arg(short, long, global = true, value_name = "FILE", default_value = DEFAULT_DESCRIPTOR)]
    pub name: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Generate a new debian.toml with all required fields for a package build
    New,

    /// Create a debian/ directory from debian.toml
    Create {
        /// Directory the debian/ directory is created in
        #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if no subcommand is given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::MissingSubcommand
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                if let Err(err) = Args::command().print_help() {
                    eprintln!("Failed to print help: {err}");
                }
                std::process::exit(1);
            }
            _ => e.exit(),
        },
    }
}
