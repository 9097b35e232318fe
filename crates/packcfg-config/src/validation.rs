//! Pluggable record validation strategies
//!
//! Separates invariant checks (no filesystem access) from checks that the
//! referenced source files exist on disk.

use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::record::ConfigurationRecord;

/// Trait for pluggable record validation strategies
pub trait ConfigValidator {
    fn validate(&self, record: &ConfigurationRecord) -> Result<()>;
}

/// Invariant-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use packcfg_config::{ConfigBuilder, ConfigValidator, SchemaValidator};
///
/// let record = ConfigBuilder::new("/project/frontend").unwrap().build();
/// SchemaValidator.validate(&record).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, record: &ConfigurationRecord) -> Result<()> {
        require_absolute("entry", &record.entry)?;
        require_absolute("output.path", &record.output.path)?;
        require_absolute(
            "devServer.static.directory",
            record.dev_server.static_directory(),
        )?;

        let filename = record.output.filename.as_str();
        if filename.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "output filename cannot be empty".to_string(),
                hint: Some("Set output.filename, e.g. \"main.js\"".to_string()),
            });
        }
        if Path::new(filename).file_name().and_then(|n| n.to_str()) != Some(filename) {
            return Err(ConfigError::SchemaValidation {
                message: format!("output filename '{filename}' must be a bare file name"),
                hint: Some("Directories belong in output.path".to_string()),
            });
        }

        if record.dev_server.static_directory() != record.output.path {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "dev server serves {} but output is written to {}",
                    record.dev_server.static_directory().display(),
                    record.output.path.display()
                ),
                hint: Some("The dev server must serve the build output directory".to_string()),
            });
        }

        if record.dev_server.port == Some(0) {
            return Err(ConfigError::SchemaValidation {
                message: "dev server port cannot be 0".to_string(),
                hint: Some("Leave port unset to let the bundler choose".to_string()),
            });
        }

        for html in record.html_plugins() {
            require_absolute("plugins.html.template", &html.template)?;
            if html.filename.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "HTML plugin filename cannot be empty".to_string(),
                    hint: Some("Use \"index.html\"".to_string()),
                });
            }
        }

        Ok(())
    }
}

fn require_absolute(field: &str, path: &Path) -> Result<()> {
    if path.is_absolute() {
        return Ok(());
    }
    Err(ConfigError::SchemaValidation {
        message: format!("{field} must be absolute, got {}", path.display()),
        hint: None,
    })
}

/// Filesystem validator (for CLI use)
///
/// Runs the schema checks, then requires the entry script and every HTML
/// template to exist.
pub struct FsValidator;

impl ConfigValidator for FsValidator {
    fn validate(&self, record: &ConfigurationRecord) -> Result<()> {
        SchemaValidator.validate(record)?;

        if !record.entry.is_file() {
            return Err(ConfigError::EntryNotFound {
                path: record.entry.clone(),
            });
        }

        for html in record.html_plugins() {
            if !html.template.is_file() {
                return Err(ConfigError::TemplateNotFound {
                    path: html.template.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(record: &ConfigurationRecord) -> Result<()> {
    SchemaValidator.validate(record)
}

/// Convenience function for filesystem validation
pub fn validate_fs(record: &ConfigurationRecord) -> Result<()> {
    FsValidator.validate(record)
}
