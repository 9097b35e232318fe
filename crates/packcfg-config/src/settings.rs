//! Project settings layered over the built-in layout.
//!
//! Priority: profile overrides > environment variables > settings file > defaults

use std::collections::HashMap;
use std::path::Path;

use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result as ConfigResult};
use crate::record::Mode;

/// Settings file looked up in the configuration directory.
pub const SETTINGS_FILE: &str = "packcfg.toml";

/// Prefix of environment variables read as settings (`PACKCFG_DEV_PORT`).
pub const ENV_PREFIX: &str = "PACKCFG_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub mode: Mode,

    #[serde(default)]
    pub dev: DevSettings,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub profiles: HashMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevSettings {
    #[serde(default = "crate::record::helpers::default_host")]
    pub host: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(default)]
    pub open: bool,
}

impl Default for DevSettings {
    fn default() -> Self {
        Self {
            host: crate::record::helpers::default_host(),
            port: None,
            open: false,
        }
    }
}

impl Settings {
    /// Load settings for the project rooted at `config_dir`.
    ///
    /// The settings file is optional. Environment variables use `_` as the
    /// nesting separator, so `PACKCFG_DEV_HOST` sets `dev.host`.
    pub fn load(config_dir: &Path) -> ConfigResult<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        let file = config_dir.join(SETTINGS_FILE);
        match std::fs::metadata(&file) {
            Ok(meta) if meta.is_file() => {
                debug!(path = %file.display(), "loading settings file");
                figment = figment.merge(Toml::file(&file));
            }
            Ok(_) => debug!(path = %file.display(), "settings path is not a file, skipping"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(ConfigError::Io(err)),
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("_"));

        // Checked on its own so a bad mode reports as such, not as a generic value error.
        if let Ok(raw) = figment.extract_inner::<String>("mode") {
            raw.parse::<Mode>()?;
        }

        figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "settings".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Load settings and apply the named profile, if any.
    pub fn load_with_profile(config_dir: &Path, profile: Option<&str>) -> ConfigResult<Self> {
        Self::load(config_dir)?.materialize_profile(profile)
    }

    /// Deep-merge the overrides of `profile` into these settings.
    ///
    /// # Example
    ///
    /// ```
    /// use packcfg_config::{Mode, Settings};
    /// use serde_json::json;
    ///
    /// let mut settings = Settings::default();
    /// settings
    ///     .profiles
    ///     .insert("release".to_string(), json!({ "mode": "production" }));
    ///
    /// let settings = settings.materialize_profile(Some("release")).unwrap();
    /// assert_eq!(settings.mode, Mode::Production);
    /// ```
    pub fn materialize_profile(mut self, profile: Option<&str>) -> ConfigResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };

        let overrides = self
            .profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))?;

        if overrides.is_null() {
            return Ok(self);
        }
        if let Some(Value::String(raw)) = overrides.get("mode") {
            raw.parse::<Mode>()?;
        }

        debug!(profile = name, "applying profile overrides");
        let profiles = std::mem::take(&mut self.profiles);
        let mut base =
            serde_json::to_value(&self).map_err(|err| ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            })?;
        merge_values(&mut base, &overrides);

        let mut merged: Settings =
            serde_json::from_value(base).map_err(|err| ConfigError::InvalidProfileOverride {
                message: format!("profile '{name}': {err}"),
            })?;
        merged.profiles = profiles;
        Ok(merged)
    }
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
