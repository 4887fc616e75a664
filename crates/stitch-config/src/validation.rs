//! Opt-in validation of a composed configuration.
//!
//! Composition never calls these; they back `stitch check` and any caller
//! that wants stricter guarantees than the template gate.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::fragment::{ConfigFragment, LoaderOptions, PluginSpec};

/// Trait for pluggable validation strategies
pub trait FragmentValidator {
    fn validate(&self, config: &ConfigFragment) -> Result<()>;
}

/// Structural checks only (no filesystem access)
///
/// # Example
///
/// ```
/// use stitch_config::{parts, ConfigFragment, FragmentValidator, SchemaValidator};
///
/// let mut config = parts::script_minify();
/// config.entry.insert("app".into(), "src/js/index.js".into());
/// config.output = Some(stitch_config::OutputOptions {
///     filename: Some("app.js".into()),
///     ..Default::default()
/// });
///
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl FragmentValidator for SchemaValidator {
    fn validate(&self, config: &ConfigFragment) -> Result<()> {
        if config.entry.is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "no entry points".to_string(),
                hint: Some("Register at least one entry chunk".to_string()),
            });
        }

        if config.output_filename().is_none_or(|f| f.trim().is_empty()) {
            return Err(ConfigError::SchemaValidation {
                message: "output filename is missing".to_string(),
                hint: Some("Set output.filename, e.g. 'app.[contenthash].js'".to_string()),
            });
        }

        for rule in config.rules() {
            rule.check_patterns()?;

            for loader in &rule.uses {
                if let Some(LoaderOptions::Asset(asset)) = &loader.options {
                    if asset.limit == 0 {
                        return Err(ConfigError::SchemaValidation {
                            message: format!(
                                "inline limit for '{}' on rule {} is zero",
                                loader.loader, rule.test
                            ),
                            hint: Some("Use a positive byte threshold".to_string()),
                        });
                    }
                }
            }
        }

        let mut pages = HashSet::new();
        for page in config.html_templates() {
            if !pages.insert(page.filename.as_str()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("two templates write '{}'", page.filename),
                    hint: Some("Each HTML page needs a distinct output filename".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs [`SchemaValidator`], then checks that entries, templates and copied
/// assets exist on disk. Relative paths resolve against `root`.
pub struct FsValidator {
    root: std::path::PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl FragmentValidator for FsValidator {
    fn validate(&self, config: &ConfigFragment) -> Result<()> {
        SchemaValidator.validate(config)?;

        for entry in config.entry.values() {
            let path = self.root.join(entry);
            if !path.exists() {
                return Err(ConfigError::EntryNotFound { path });
            }
        }

        for plugin in &config.plugins {
            match plugin {
                PluginSpec::HtmlTemplate(page) => {
                    let path = self.root.join(&page.template);
                    if !path.exists() {
                        return Err(ConfigError::AssetNotFound { path });
                    }
                }
                PluginSpec::CopyAssets(copy) => {
                    for pattern in &copy.patterns {
                        let path = self.root.join(&pattern.from);
                        if !path.exists() {
                            return Err(ConfigError::AssetNotFound { path });
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &ConfigFragment) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &ConfigFragment, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
