//! packcfg CLI - emits and checks bundler configuration.
//!
//! The CLI is organized into several key modules:
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - `print` and `check` implementations
//! - [`error`] - CLI error type and report conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status lines on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
