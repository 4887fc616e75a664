//! Shared helpers for command implementations.

use std::path::Path;

use stitch_config::ComposeContext;
use tracing::debug;

use crate::error::{CliError, Result};

/// Load settings, environment and template source for the project at `root`.
pub fn load_context(root: &Path) -> Result<ComposeContext> {
    if !root.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "project root '{}' is not a directory",
            root.display()
        )));
    }

    let ctx = ComposeContext::load(root)?;
    debug!(root = %ctx.root.display(), "project root resolved");
    Ok(ctx)
}

/// Render a path relative to the project root when possible.
pub fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
