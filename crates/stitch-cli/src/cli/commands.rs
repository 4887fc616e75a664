use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::Mode;

/// Available stitch subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the composed bundler configuration
    ///
    /// Discovers the HTML templates in the source directory, composes the
    /// common fragment with the overlay for the chosen mode and writes the
    /// result as JSON, for a bundler driver to consume.
    Config(ConfigArgs),

    /// Compose and validate without emitting anything
    ///
    /// Checks rule patterns, output naming and page names, then verifies
    /// that the entry script, every template and the favicon exist.
    Check(CheckArgs),

    /// List the HTML templates that become output pages
    Templates(TemplatesArgs),
}

/// Project location and build mode, shared by every command
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Build mode
    #[arg(short, long, value_enum, default_value = "development")]
    pub mode: Mode,

    /// Project root containing the source directory and optional stitch.toml
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Arguments for the templates command
#[derive(Args, Debug)]
pub struct TemplatesArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}
