//! Check command implementation.
//!
//! Composes the configuration, then validates it against the project tree
//! without writing anything.

use stitch_config::{compose, BuildMode, FragmentValidator, FsValidator};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Discover templates and compose the profile for the chosen mode
/// 2. Check rule patterns, output naming and page names
/// 3. Check that the entry, each template and copied assets exist
pub fn execute(args: CheckArgs) -> Result<()> {
    let mode = BuildMode::from(args.project.mode);
    ui::info(&format!("Checking {mode} configuration..."));

    let ctx = utils::load_context(&args.project.root)?;
    let config = compose(&ctx, mode)?;
    FsValidator::new(&ctx.root).validate(&config)?;

    ui::success("Configuration is valid!");
    for (name, path) in &config.entry {
        ui::detail(
            &format!("entry {name}"),
            utils::display_relative(path, &ctx.root),
        );
    }
    ui::detail("pages", config.html_templates().count());
    ui::detail("rules", config.rules().len());
    ui::detail("plugins", config.plugins.len());

    if mode.is_development() && matches!(ctx.env.port(), Ok(Some(_))) {
        ui::warning("PORT is set in the environment and overrides the configured port");
    }

    Ok(())
}
