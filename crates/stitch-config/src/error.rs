//! Error types for configuration discovery, composition and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // The single gate composition enforces
    #[error("the {dir} directory requires at least one .html file")]
    NoTemplates { dir: String },

    #[error("unknown build mode '{0}' (expected 'development' or 'production')")]
    InvalidMode(String),

    #[error("invalid environment: {0}")]
    InvalidEnvironment(String),

    // Settings file parsing/loading errors
    #[error("invalid config value for '{field}'{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    // Opt-in validation errors
    #[error("schema validation failed: {message}{}", .hint.as_ref().map(|h| format!("\n\nHint: {h}")).unwrap_or_default())]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("entry path not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    #[error("asset not found: {}", .path.display())]
    AssetNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_templates_names_the_directory() {
        let err = ConfigError::NoTemplates {
            dir: "src".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "the src directory requires at least one .html file"
        );
    }

    #[test]
    fn invalid_value_includes_hint_when_present() {
        let err = ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: Some("Invalid TOML syntax".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for 'toml': Invalid TOML syntax"
        );

        let err = ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: None,
        };
        assert_eq!(err.to_string(), "invalid config value for 'toml'");
    }
}
