//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Path resolution
    #[error("failed to resolve paths against {}: {source}", .base.display())]
    PathResolution {
        base: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration directory not found: {}", .0.display())]
    BaseDirNotFound(PathBuf),

    #[error("configuration path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    // Settings parsing/loading
    #[error("invalid mode '{0}' (expected 'development' or 'production')")]
    InvalidMode(String),

    #[error("invalid config value for '{field}'{}", suffix(.hint, ": ", ""))]
    InvalidValue { field: String, hint: Option<String> },

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    #[error("profile '{0}' is not defined")]
    ProfileNotFound(String),

    // Filesystem validation (for CLI use)
    #[error("entry script not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    #[error("HTML template not found: {}", .path.display())]
    TemplateNotFound { path: PathBuf },

    // Schema validation (no filesystem checks)
    #[error("schema validation failed: {message}{}", suffix(.hint, " (", ")"))]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn suffix(hint: &Option<String>, open: &str, close: &str) -> String {
    match hint {
        Some(hint) => format!("{open}{hint}{close}"),
        None => String::new(),
    }
}
