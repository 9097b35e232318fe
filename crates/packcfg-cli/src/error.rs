//! Error handling for the packcfg CLI.
//!
//! `CliError` wraps the library's `ConfigError` together with the failures
//! that only the CLI can hit (writing output, serializing JSON). The final
//! report is rendered through `miette`.

mod report;

use thiserror::Error;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (missing directory, bad settings, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] packcfg_config::ConfigError),

    /// I/O errors while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use packcfg_config::ConfigError;
    use std::path::PathBuf;

    #[test]
    fn cli_error_from_config_error() {
        let err: CliError = ConfigError::BaseDirNotFound(PathBuf::from("/nope")).into();
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: configuration directory not found: /nope"
        );
    }

    #[test]
    fn cli_error_from_io_error() {
        let err: CliError = std::io::Error::other("broken pipe").into();
        assert!(matches!(err, CliError::Io(_)));
    }
}
