//! Development server descriptor.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::record::helpers::default_host;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerDescriptor {
    /// Directory served as static content
    #[serde(rename = "static")]
    pub static_files: StaticOptions,

    #[serde(default = "default_host")]
    pub host: String,

    /// Unset lets the bundler pick its own port
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(default)]
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticOptions {
    pub directory: PathBuf,
}

impl DevServerDescriptor {
    /// Serve `directory` with default host and port.
    pub fn serving(directory: PathBuf) -> Self {
        Self {
            static_files: StaticOptions { directory },
            host: default_host(),
            port: None,
            open: false,
        }
    }

    pub fn static_directory(&self) -> &std::path::Path {
        &self.static_files.directory
    }
}
