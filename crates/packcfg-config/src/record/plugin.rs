use serde::{Deserialize, Serialize};

use crate::record::html::HtmlPluginDescriptor;

/// A plugin instance requested from the bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PluginDescriptor {
    /// HTML template injection
    Html(HtmlPluginDescriptor),
}

impl PluginDescriptor {
    pub fn as_html(&self) -> Option<&HtmlPluginDescriptor> {
        match self {
            PluginDescriptor::Html(html) => Some(html),
        }
    }
}

impl From<HtmlPluginDescriptor> for PluginDescriptor {
    fn from(html: HtmlPluginDescriptor) -> Self {
        PluginDescriptor::Html(html)
    }
}
