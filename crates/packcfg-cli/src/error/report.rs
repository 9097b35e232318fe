//! Miette report conversion for CLI errors.

use miette::Report;
use packcfg_config::ConfigError;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report, attaching a hint where one helps
pub fn config_error_to_miette(err: ConfigError) -> Report {
    let hint = match &err {
        ConfigError::BaseDirNotFound(_) | ConfigError::NotADirectory(_) => {
            Some("Pass --dir pointing at the directory that contains src/")
        }
        ConfigError::EntryNotFound { .. } => Some("Create src/index.js or check --dir"),
        ConfigError::TemplateNotFound { .. } => Some("Create src/index.html or check --dir"),
        ConfigError::ProfileNotFound(_) => Some("Define the profile as [profiles.NAME] in packcfg.toml"),
        ConfigError::InvalidMode(_) => Some("Valid modes are 'development' and 'production'"),
        ConfigError::InvalidValue { .. } | ConfigError::InvalidProfileOverride { .. } => {
            Some("Check packcfg.toml and PACKCFG_* environment variables")
        }
        _ => None,
    };

    match hint {
        Some(hint) => miette::miette!(help = hint, "Configuration error: {}", err),
        None => miette::miette!("Configuration error: {}", err),
    }
}
