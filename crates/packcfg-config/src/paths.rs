//! Project layout resolution.
//!
//! Every path is resolved against the configuration directory, never the
//! process working directory (except to absolutize a relative base).

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Source directory name, relative to the configuration directory.
pub const SOURCE_DIR: &str = "src";

/// Build output directory name, relative to the configuration directory.
pub const DIST_DIR: &str = "dist";

/// Join `segments` onto `base` and normalize the result lexically.
///
/// An absolute segment restarts the path, so `resolve_path("/a", ["/b", "c"])`
/// is `/b/c`. A relative `base` is anchored at the current working directory.
///
/// # Example
///
/// ```
/// use packcfg_config::resolve_path;
/// use std::path::{Path, PathBuf};
///
/// let path = resolve_path(Path::new("/project/frontend"), &["src", "../dist"]).unwrap();
/// assert_eq!(path, PathBuf::from("/project/frontend/dist"));
/// ```
pub fn resolve_path<S: AsRef<Path>>(base: &Path, segments: &[S]) -> Result<PathBuf> {
    let mut resolved = absolutize(base)?;
    for segment in segments {
        resolved.push(segment);
    }
    Ok(resolved.clean())
}

fn absolutize(base: &Path) -> Result<PathBuf> {
    if base.is_absolute() {
        return Ok(base.to_path_buf());
    }

    let cwd = std::env::current_dir().map_err(|source| ConfigError::PathResolution {
        base: base.to_path_buf(),
        source,
    })?;
    Ok(cwd.join(base))
}

/// Absolute source and distribution directories of a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPair {
    pub source_dir: PathBuf,
    pub dist_dir: PathBuf,
}

impl PathPair {
    /// Resolve `src` and `dist` against `config_dir`.
    pub fn resolve(config_dir: &Path) -> Result<Self> {
        let pair = Self {
            source_dir: resolve_path(config_dir, &[SOURCE_DIR])?,
            dist_dir: resolve_path(config_dir, &[DIST_DIR])?,
        };
        debug!(
            source_dir = %pair.source_dir.display(),
            dist_dir = %pair.dist_dir.display(),
            "resolved project layout"
        );
        Ok(pair)
    }

    /// Resolve a file inside the source directory.
    pub fn source_file(&self, name: &str) -> PathBuf {
        self.source_dir.join(name).clean()
    }
}
