//! Project settings: the knobs the composer reads besides the build mode.
//!
//! Every field has a default, so a project without a settings file composes
//! with the conventional layout (`src/`, `dist/`, `src/js/index.js`,
//! `src/favicon.ico`). Per-mode tweaks live under `profiles.<mode>`.

mod helpers;

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ConfigError, Result as ConfigResult};
use crate::fragment::{Devtool, TranspileOptions};
use crate::mode::BuildMode;

use helpers::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Source directory, relative to the project root
    #[serde(default = "default_src_dir")]
    pub src_dir: PathBuf,

    /// Output directory, relative to the project root
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    /// Name of the single entry chunk
    #[serde(default = "default_entry_name")]
    pub entry_name: String,

    /// Entry script, relative to `src_dir`
    #[serde(default = "default_entry")]
    pub entry: PathBuf,

    /// Icon copied next to every page, relative to `src_dir`
    #[serde(default = "default_favicon")]
    pub favicon: PathBuf,

    #[serde(default)]
    pub public_path: String,

    /// Pattern for directories the script and HTML rules skip
    #[serde(default = "default_dependency_pattern")]
    pub dependency_pattern: String,

    #[serde(default)]
    pub dev: DevSettings,

    #[serde(default)]
    pub assets: AssetSettings,

    #[serde(default)]
    pub transpile: TranspileSettings,

    /// Forwarded to the lint plugin as-is
    #[serde(default)]
    pub lint: Map<String, Value>,

    /// Overrides applied by [`ProjectSettings::for_mode`]
    #[serde(default, skip_serializing)]
    pub profiles: HashMap<String, Value>,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            dist_dir: default_dist_dir(),
            entry_name: default_entry_name(),
            entry: default_entry(),
            favicon: default_favicon(),
            public_path: String::new(),
            dependency_pattern: default_dependency_pattern(),
            dev: DevSettings::default(),
            assets: AssetSettings::default(),
            transpile: TranspileSettings::default(),
            lint: Map::new(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevSettings {
    #[serde(default)]
    pub host: Option<String>,

    /// Overridden by the `PORT` environment variable
    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub devtool: Devtool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSettings {
    #[serde(default = "default_font_name")]
    pub font_name: String,

    /// Fonts below this many bytes are inlined
    #[serde(default = "default_font_limit")]
    pub font_limit: u64,

    /// Image naming in development (cache-busting query)
    #[serde(default = "default_dev_image_name")]
    pub dev_image_name: String,

    /// Image naming in production (hashed file name)
    #[serde(default = "default_prod_image_name")]
    pub prod_image_name: String,

    /// Images below this many bytes are inlined
    #[serde(default = "default_image_limit")]
    pub image_limit: u64,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            font_name: default_font_name(),
            font_limit: default_font_limit(),
            dev_image_name: default_dev_image_name(),
            prod_image_name: default_prod_image_name(),
            image_limit: default_image_limit(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranspileSettings {
    #[serde(default = "default_presets")]
    pub presets: Vec<String>,
}

impl Default for TranspileSettings {
    fn default() -> Self {
        Self {
            presets: default_presets(),
        }
    }
}

impl From<TranspileSettings> for TranspileOptions {
    fn from(settings: TranspileSettings) -> Self {
        Self {
            presets: settings.presets,
        }
    }
}

impl ProjectSettings {
    /// Create from serde_json::Value
    ///
    /// # Example
    ///
    /// ```
    /// use stitch_config::ProjectSettings;
    /// use serde_json::json;
    ///
    /// let settings = ProjectSettings::from_value(json!({ "dist_dir": "public" })).unwrap();
    /// assert_eq!(settings.dist_dir, std::path::PathBuf::from("public"));
    /// assert_eq!(settings.entry_name, "app");
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "settings".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "settings".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Settings with `profiles.<mode>` applied on top.
    ///
    /// Objects merge key by key; arrays and scalars in the profile replace
    /// the base value. A mode without a profile returns the settings as-is.
    pub fn for_mode(self, mode: BuildMode) -> ConfigResult<Self> {
        let Some(overrides) = self.profiles.get(mode.as_str()).cloned() else {
            return Ok(self);
        };

        if overrides.is_null() {
            return Ok(self);
        }

        let profiles = self.profiles.clone();
        let mut base =
            serde_json::to_value(&self).map_err(|err| ConfigError::InvalidProfileOverride {
                message: err.to_string(),
            })?;
        merge_values(&mut base, &overrides);
        let mut updated: ProjectSettings =
            serde_json::from_value(base).map_err(|err| ConfigError::InvalidProfileOverride {
                message: format!("profiles.{mode}: {err}"),
            })?;
        updated.profiles = profiles;
        Ok(updated)
    }

    /// `src_dir` for `mode`, honoring a string `profiles.<mode>.src_dir`.
    pub fn src_dir_for(&self, mode: BuildMode) -> PathBuf {
        profile_src_dir(&self.profiles, mode).unwrap_or_else(|| self.src_dir.clone())
    }
}

/// `src_dir` for `mode` read from unparsed settings.
///
/// Falls back to the default when the key is missing or not a string, so
/// template discovery can run before the rest of the settings are checked.
pub(crate) fn raw_src_dir(value: &Value, mode: BuildMode) -> PathBuf {
    let from_profile = value
        .get("profiles")
        .and_then(Value::as_object)
        .and_then(|profiles| profiles.get(mode.as_str()))
        .and_then(|profile| profile.get("src_dir"))
        .and_then(Value::as_str);

    from_profile
        .or_else(|| value.get("src_dir").and_then(Value::as_str))
        .map(PathBuf::from)
        .unwrap_or_else(default_src_dir)
}

fn profile_src_dir(profiles: &HashMap<String, Value>, mode: BuildMode) -> Option<PathBuf> {
    profiles
        .get(mode.as_str())
        .and_then(|profile| profile.get("src_dir"))
        .and_then(Value::as_str)
        .map(PathBuf::from)
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
