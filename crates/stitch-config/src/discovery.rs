//! File-based settings discovery
//!
//! Finds and loads project settings from the project root.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::settings::ProjectSettings;

pub const SETTINGS_FILE: &str = "stitch.toml";
const PACKAGE_FIELD: &str = "stitch";

/// File-based settings discovery
///
/// # Example
///
/// ```no_run
/// use stitch_config::SettingsDiscovery;
///
/// let settings = SettingsDiscovery::new(".").load_or_default().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SettingsDiscovery {
    root: PathBuf,
}

impl SettingsDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a settings file in the root directory
    ///
    /// Searches in this order:
    /// 1. stitch.toml
    /// 2. package.json (stitch field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(SETTINGS_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get(PACKAGE_FIELD).is_some_and(|v| !v.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load settings from the discovered file, or defaults when there is none
    pub fn load_or_default(&self) -> Result<ProjectSettings> {
        match self.load_value()? {
            Some(value) => ProjectSettings::from_value(value),
            None => {
                debug!(root = %self.root.display(), "no settings file, using defaults");
                Ok(ProjectSettings::default())
            }
        }
    }

    /// Raw settings as JSON, before any typed parsing.
    ///
    /// Only file syntax is checked here; field types are checked by
    /// [`ProjectSettings::from_value`].
    pub fn load_value(&self) -> Result<Option<Value>> {
        let Some(path) = self.find() else {
            return Ok(None);
        };
        debug!(path = %path.display(), "loading project settings");

        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return self.package_field(&path).map(Some);
        }

        let content = fs::read_to_string(&path)?;

        let toml_val: toml::Value =
            toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: SETTINGS_FILE.to_string(),
                hint: Some(format!("Invalid TOML syntax: {}", e)),
            })?;

        serde_json::to_value(toml_val)
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field: SETTINGS_FILE.to_string(),
                hint: Some(format!("TOML to JSON conversion failed: {}", e)),
            })
    }

    fn package_field(&self, path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;

        let mut parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("Invalid JSON: {}", e)),
            })?;

        parsed
            .get_mut(PACKAGE_FIELD)
            .filter(|v| !v.is_null())
            .map(Value::take)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: PACKAGE_FIELD.to_string(),
                hint: Some("Add a 'stitch' object to your package.json".to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_settings() {
        let dir = TempDir::new().unwrap();
        assert!(SettingsDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = SettingsDiscovery::new(dir.path()).load_or_default().unwrap();
        assert_eq!(settings, ProjectSettings::default());
    }

    #[test]
    fn package_json_without_field_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{ "name": "site" }"#).unwrap();
        assert!(SettingsDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn raw_value_skips_type_checks() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "src_dir = \"web\"\nassets = \"x\"\n").unwrap();

        let discovery = SettingsDiscovery::new(dir.path());
        let value = discovery.load_value().unwrap().expect("settings file");
        assert_eq!(value["src_dir"], "web");
        assert!(discovery.load_or_default().is_err());
    }

    #[test]
    fn invalid_toml_is_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "src_dir = ").unwrap();
        let err = SettingsDiscovery::new(dir.path())
            .load_or_default()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == SETTINGS_FILE));
    }
}
