use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::record::helpers::default_html_filename;

/// Template file name inside the source directory.
pub const HTML_TEMPLATE: &str = "index.html";

/// HTML generation options
///
/// Asks the bundler to emit an HTML file built from `template` with
/// references to the output bundle injected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlPluginDescriptor {
    /// Absolute path to the HTML template
    pub template: PathBuf,

    /// Output filename for generated HTML (default: "index.html")
    #[serde(default = "default_html_filename")]
    pub filename: String,
}

impl HtmlPluginDescriptor {
    pub fn new(template: PathBuf) -> Self {
        Self {
            template,
            filename: default_html_filename(),
        }
    }
}
