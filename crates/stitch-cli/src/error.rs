//! Error handling for the stitch CLI.
//!
//! Composition failures arrive as [`stitch_config::ConfigError`] and are
//! wrapped by [`CliError`]; everything the CLI adds on top (output files,
//! JSON encoding) lives here too.
//!
//! # Example
//!
//! ```rust,no_run
//! use stitch_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn write_config(path: &Path, json: &str) -> Result<()> {
//!     std::fs::write(path, json)
//!         .with_path(path)
//!         .with_hint("Check that the output directory exists")
//! }
//! ```

mod diagnostic;

use std::path::PathBuf;
use thiserror::Error;

pub use diagnostic::cli_error_to_miette;
pub use stitch_config::ConfigError;

/// Error returned by every command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Anything raised while loading, composing or validating
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Arguments clap accepted but the project layout rejects
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Output path not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the composed configuration failed
    #[error("could not encode configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}

/// Result alias for command implementations.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Attach output-path and hint context to fallible CLI steps.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }
}
