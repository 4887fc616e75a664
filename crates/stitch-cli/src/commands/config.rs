//! Config command implementation.
//!
//! Composes the configuration for one mode and writes it as JSON.

use std::fs;
use std::io::Write;

use stitch_config::{compose, BuildMode, ConfigFragment};
use tracing::info;

use crate::cli::ConfigArgs;
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the config command.
///
/// Without `--output` the JSON goes to stdout and nothing else does, so the
/// command can feed a bundler driver directly.
pub fn execute(args: ConfigArgs) -> Result<()> {
    let mode = BuildMode::from(args.project.mode);
    let ctx = utils::load_context(&args.project.root)?;
    let config = compose(&ctx, mode)?;
    let json = render(&config, args.compact)?;

    match args.output {
        Some(path) => {
            fs::write(&path, format!("{json}\n"))
                .with_path(&path)
                .with_hint("Check that the output directory exists")?;
            info!(path = %path.display(), "configuration written");
            ui::success(&format!("Wrote {mode} configuration to {}", path.display()));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}

/// Serialize a composed configuration.
pub fn render(config: &ConfigFragment, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(config)?
    } else {
        serde_json::to_string_pretty(config)?
    };
    Ok(json)
}
