//! Command-line interface definition for packcfg.
//!
//! # Command Structure
//!
//! - `packcfg print` - Emit the configuration record as JSON
//! - `packcfg check` - Validate the configuration record

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, LoadArgs, PrintArgs};
pub use enums::*;

/// packcfg - bundler configuration for front-end projects
#[derive(Parser, Debug)]
#[command(
    name = "packcfg",
    version,
    about = "Emit and check bundler configuration for a front-end project",
    long_about = "packcfg resolves a project's src/ and dist/ directories relative to the\n\
                  project directory and emits the configuration record an external bundler\n\
                  consumes: entry script, output location, HTML template plugin and dev server."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
