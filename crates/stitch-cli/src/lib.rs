//! stitch CLI - compose bundler configurations from the command line.
//!
//! The binary is a thin layer over [`stitch_config`]: it parses arguments,
//! sets up logging and colors, runs one command and reports errors through
//! miette.
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - `config`, `check` and `templates`
//! - [`error`] - CLI error type and diagnostic conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Status messages on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
