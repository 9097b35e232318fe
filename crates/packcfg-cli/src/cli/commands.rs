use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::ModeArg;

/// Available packcfg subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the configuration record as JSON
    ///
    /// Writes the record to stdout for the bundler to read. Status messages
    /// and logs go to stderr.
    Print(PrintArgs),

    /// Validate the configuration record
    ///
    /// Checks record invariants and, unless --skip-fs is given, that the
    /// entry script and HTML template exist.
    Check(CheckArgs),
}

/// Options shared by every command that loads a configuration
#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Project directory (holds src/, dist/ and an optional packcfg.toml)
    #[arg(short = 'd', long, default_value = ".", value_name = "DIR")]
    pub dir: PathBuf,

    /// Build mode, overriding settings and profile
    #[arg(short = 'm', long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Settings profile to apply (a [profiles.NAME] table in packcfg.toml)
    #[arg(short = 'p', long, value_name = "NAME")]
    pub profile: Option<String>,
}

/// Arguments for the print command
#[derive(Args, Debug)]
pub struct PrintArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Emit single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Only check record invariants, not the files on disk
    #[arg(long)]
    pub skip_fs: bool,
}
