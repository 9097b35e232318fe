//! Print command implementation.

use std::io::Write;

use packcfg_config::validate_schema;
use tracing::info;

use crate::cli::PrintArgs;
use crate::commands::utils;
use crate::error::Result;

/// Execute the print command.
///
/// The record is checked against its invariants before it is written, so a
/// broken configuration never reaches the bundler.
pub fn execute(args: PrintArgs) -> Result<()> {
    let builder = utils::load_builder(&args.load)?;
    let record = builder.build();
    validate_schema(&record)?;

    let json = if args.compact {
        serde_json::to_string(&record)?
    } else {
        serde_json::to_string_pretty(&record)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;

    info!(mode = %record.mode, output = %record.output.bundle_path().display(), "configuration emitted");
    Ok(())
}
