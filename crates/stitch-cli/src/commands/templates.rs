//! Templates command implementation.

use std::io::Write;

use stitch_config::{discover_pages, BuildMode};

use crate::cli::TemplatesArgs;
use crate::commands::utils;
use crate::error::Result;

/// Print each template file name for the chosen mode on its own line.
pub fn execute(args: TemplatesArgs) -> Result<()> {
    let ctx = utils::load_context(&args.project.root)?;
    let templates = discover_pages(&ctx, BuildMode::from(args.project.mode))?;

    let mut stdout = std::io::stdout().lock();
    for template in &templates {
        writeln!(stdout, "{}", template.file_name)?;
    }
    Ok(())
}
