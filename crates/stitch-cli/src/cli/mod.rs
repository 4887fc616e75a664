//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `stitch config` - Compose and print the bundler configuration
//! - `stitch check` - Compose and validate against the filesystem
//! - `stitch templates` - List discovered HTML templates

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, ConfigArgs, ProjectArgs, TemplatesArgs};
pub use enums::*;

/// stitch - development and production profiles for a front-end bundler
#[derive(Parser, Debug)]
#[command(
    name = "stitch",
    version,
    about = "Compose development and production bundler configurations",
    long_about = "stitch wires HTML templates, script transpilation, style extraction,\n\
                  asset inlining, linting and minification into one bundler configuration\n\
                  per build mode, and prints it as JSON."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
