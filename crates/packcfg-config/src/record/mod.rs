//! The configuration record handed to the bundler.

mod dev;
pub(crate) mod helpers;
mod html;
mod output;
mod plugin;
mod types;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

pub use dev::{DevServerDescriptor, StaticOptions};
pub use html::{HtmlPluginDescriptor, HTML_TEMPLATE};
pub use output::{OutputDescriptor, OUTPUT_FILENAME};
pub use plugin::PluginDescriptor;
pub use types::Mode;

use crate::error::ConfigError;

/// Entry script file name inside the source directory.
pub const ENTRY_SCRIPT: &str = "index.js";

/// Complete bundler configuration
///
/// Created once per invocation and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRecord {
    pub mode: Mode,

    /// Script the bundler starts dependency traversal from
    pub entry: PathBuf,

    pub output: OutputDescriptor,

    /// Plugin instances, in the order the bundler applies them
    #[serde(default)]
    pub plugins: Vec<PluginDescriptor>,

    pub dev_server: DevServerDescriptor,
}

impl ConfigurationRecord {
    /// Create from serde_json::Value
    ///
    /// # Example
    ///
    /// ```
    /// use packcfg_config::{ConfigurationRecord, Mode};
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "mode": "production",
    ///     "entry": "/app/src/index.js",
    ///     "output": { "path": "/app/dist", "filename": "main.js" },
    ///     "plugins": [{ "kind": "html", "template": "/app/src/index.html" }],
    ///     "devServer": { "static": { "directory": "/app/dist" } }
    /// });
    ///
    /// let record = ConfigurationRecord::from_value(value).unwrap();
    /// assert_eq!(record.mode, Mode::Production);
    /// assert_eq!(record.dev_server.host, "127.0.0.1");
    /// ```
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "record".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value, ConfigError> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "record".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// HTML plugin descriptors, in declaration order.
    pub fn html_plugins(&self) -> impl Iterator<Item = &HtmlPluginDescriptor> {
        self.plugins.iter().filter_map(PluginDescriptor::as_html)
    }
}
