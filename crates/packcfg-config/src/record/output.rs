use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the emitted bundle.
pub const OUTPUT_FILENAME: &str = "main.js";

/// Where the bundler writes its output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDescriptor {
    /// Absolute output directory
    pub path: PathBuf,

    /// Bundle file name inside `path`
    pub filename: String,
}

impl OutputDescriptor {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            filename: OUTPUT_FILENAME.to_string(),
        }
    }

    /// Full path of the emitted bundle.
    pub fn bundle_path(&self) -> PathBuf {
        self.path.join(&self.filename)
    }
}
