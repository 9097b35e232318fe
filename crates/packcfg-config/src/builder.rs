//! Assembles the [`ConfigurationRecord`] for a project directory.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};
use crate::paths::{resolve_path, PathPair};
use crate::record::{
    ConfigurationRecord, DevServerDescriptor, HtmlPluginDescriptor, Mode, OutputDescriptor,
    PluginDescriptor, ENTRY_SCRIPT, HTML_TEMPLATE,
};
use crate::settings::{DevSettings, Settings};

/// Builds the bundler configuration for one project.
///
/// The project layout is resolved once, when the builder is created.
/// [`ConfigBuilder::build`] only assembles values and never touches the
/// filesystem, so it can be called any number of times.
///
/// # Example
///
/// ```
/// use packcfg_config::ConfigBuilder;
/// use std::path::PathBuf;
///
/// let record = ConfigBuilder::new("/project/frontend").unwrap().build();
/// assert_eq!(record.output.path, PathBuf::from("/project/frontend/dist"));
/// assert_eq!(record.output.filename, "main.js");
/// assert_eq!(record.entry, PathBuf::from("/project/frontend/src/index.js"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config_dir: PathBuf,
    paths: PathPair,
    mode: Mode,
    dev: DevSettings,
}

impl ConfigBuilder {
    /// Resolve the project layout against `config_dir`.
    ///
    /// Does not check that the directory exists; see [`ConfigBuilder::load`].
    pub fn new(config_dir: impl AsRef<Path>) -> Result<Self> {
        let config_dir = resolve_path::<&str>(config_dir.as_ref(), &[])?;
        let paths = PathPair::resolve(&config_dir)?;
        Ok(Self {
            config_dir,
            paths,
            mode: Mode::default(),
            dev: DevSettings::default(),
        })
    }

    /// Resolve the layout of an existing project directory and apply its
    /// settings (file, environment, then `profile`).
    pub fn load(config_dir: impl AsRef<Path>, profile: Option<&str>) -> Result<Self> {
        let builder = Self::new(config_dir)?;
        ensure_dir(&builder.config_dir)?;

        let settings = Settings::load_with_profile(&builder.config_dir, profile)?;
        Ok(builder.with_settings(&settings))
    }

    /// Same as [`ConfigBuilder::load`], keyed by the path of a file that
    /// lives in the project directory.
    pub fn for_config_file(path: impl AsRef<Path>, profile: Option<&str>) -> Result<Self> {
        let file = resolve_path::<&str>(path.as_ref(), &[])?;
        let dir = file
            .parent()
            .ok_or_else(|| ConfigError::NotADirectory(file.clone()))?;
        Self::load(dir, profile)
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.mode = settings.mode;
        self.dev = settings.dev.clone();
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn paths(&self) -> &PathPair {
        &self.paths
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Assemble the configuration record.
    pub fn build(&self) -> ConfigurationRecord {
        let output = OutputDescriptor::new(self.paths.dist_dir.clone());

        let mut dev_server = DevServerDescriptor::serving(output.path.clone());
        dev_server.host = self.dev.host.clone();
        dev_server.port = self.dev.port;
        dev_server.open = self.dev.open;

        let html = HtmlPluginDescriptor::new(self.paths.source_file(HTML_TEMPLATE));

        let record = ConfigurationRecord {
            mode: self.mode,
            entry: self.paths.source_file(ENTRY_SCRIPT),
            output,
            plugins: vec![PluginDescriptor::Html(html)],
            dev_server,
        };
        debug!(mode = %record.mode, entry = %record.entry.display(), "built configuration record");
        record
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    let meta = std::fs::metadata(dir).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => ConfigError::BaseDirNotFound(dir.to_path_buf()),
        _ => ConfigError::PathResolution {
            base: dir.to_path_buf(),
            source: err,
        },
    })?;
    if !meta.is_dir() {
        return Err(ConfigError::NotADirectory(dir.to_path_buf()));
    }

    // metadata() succeeds on directories we cannot list
    std::fs::read_dir(dir).map_err(|source| ConfigError::PathResolution {
        base: dir.to_path_buf(),
        source,
    })?;

    info!(dir = %dir.display(), "using configuration directory");
    Ok(())
}
