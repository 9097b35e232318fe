//! Shared utilities for command implementations.

use packcfg_config::ConfigBuilder;
use tracing::debug;

use crate::cli::LoadArgs;
use crate::error::{CliError, Result};

/// Load the builder for `args.dir`, applying settings, profile and the
/// `--mode` override in that order.
pub fn load_builder(args: &LoadArgs) -> Result<ConfigBuilder> {
    if args.profile.as_deref().is_some_and(|p| p.trim().is_empty()) {
        return Err(CliError::InvalidArgument(
            "profile name cannot be empty".to_string(),
        ));
    }

    let mut builder = ConfigBuilder::load(&args.dir, args.profile.as_deref())?;

    if let Some(mode) = args.mode {
        debug!(?mode, "mode overridden on command line");
        builder = builder.with_mode(mode.into());
    }

    Ok(builder)
}
