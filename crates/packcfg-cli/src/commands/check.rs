//! Check command implementation.
//!
//! Validates the configuration record without running the bundler.

use packcfg_config::{validate_fs, validate_schema};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Resolve the project directory and load settings
/// 2. Check record invariants
/// 3. Check that the entry script and HTML templates exist (unless `--skip-fs`)
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let builder = utils::load_builder(&args.load)?;
    let record = builder.build();

    validate_schema(&record)?;
    ui::success(&format!("Configuration is valid ({} mode)", record.mode));

    if args.skip_fs {
        ui::warning("Skipping filesystem checks");
        return Ok(());
    }

    if let Err(err) = validate_fs(&record) {
        ui::error(&err.to_string());
        return Err(err.into());
    }
    ui::success(&format!("  {} exists", record.entry.display()));
    for html in record.html_plugins() {
        ui::success(&format!("  {} exists", html.template.display()));
    }

    ui::success("All checks passed!");
    Ok(())
}
