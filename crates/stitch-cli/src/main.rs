//! stitch - entry point.
//!
//! Parses arguments, initializes logging and colors, then dispatches.

use clap::Parser;
use miette::Result;
use stitch_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    ui::set_quiet(args.quiet);
    let colors = ui::init_colors(args.no_color);
    logger::init_logger(args.verbose, args.quiet, !colors);

    let result = match args.command {
        cli::Command::Config(config_args) => commands::config_execute(config_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Templates(templates_args) => commands::templates_execute(templates_args),
    };

    result.map_err(error::cli_error_to_miette)
}
