//! Miette diagnostic conversion for CLI errors.

use ::miette::{miette, Report};
use stitch_config::ConfigError;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::FileNotFound(path) => miette!(
            help = "Check that the parent directory of --output exists",
            "Output path not found: {}",
            path.display()
        ),
        _ => miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::NoTemplates { .. } => miette!(
            code = "stitch::no_templates",
            help = "Add an index.html (or any .html page) to the source directory",
            "{}",
            err
        ),
        ConfigError::InvalidValue {
            ref field,
            hint: Some(ref hint),
        } => miette!(code = "stitch::settings", help = hint.clone(), "Invalid value for '{}'", field),
        ConfigError::SchemaValidation {
            ref message,
            hint: Some(ref hint),
        } => miette!(code = "stitch::schema", help = hint.clone(), "{}", message),
        ConfigError::EntryNotFound { .. } => miette!(
            code = "stitch::entry",
            help = "Check `entry` in stitch.toml, relative to the source directory",
            "{}",
            err
        ),
        ConfigError::InvalidEnvironment(_) => miette!(
            code = "stitch::env",
            help = "PORT must be a number between 0 and 65535",
            "{}",
            err
        ),
        other => miette!("{}", other),
    }
}
