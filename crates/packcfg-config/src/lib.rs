//! Configuration loader for a front-end module bundler.
//!
//! Resolves the project layout relative to the configuration directory and
//! produces a [`ConfigurationRecord`] that an external bundler consumes.

pub mod builder;
pub mod error;
pub mod paths;
pub mod record;
pub mod settings;
pub mod validation;

pub use builder::*;
pub use error::*;
pub use paths::{resolve_path, PathPair};
pub use record::*;
pub use settings::{DevSettings, Settings, SETTINGS_FILE};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
