//! Logging setup for the stitch CLI.
//!
//! Log lines go to stderr through a compact `tracing-subscriber` formatter,
//! leaving stdout for the composed configuration.
//!
//! ```rust,no_run
//! use stitch_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("composing");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATES: [&str; 3] = ["stitch", "stitch_cli", "stitch_config"];

/// Initialize the tracing subscriber.
///
/// The level is chosen in this order:
/// 1. `--verbose`: DEBUG for stitch crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG`
/// 4. INFO for stitch crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = build_filter(verbose, quiet)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| crate_filter("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Filter forced by command-line flags, if any.
fn build_filter(verbose: bool, quiet: bool) -> Option<EnvFilter> {
    if verbose {
        Some(crate_filter("debug"))
    } else if quiet {
        Some(EnvFilter::new("error"))
    } else {
        None
    }
}

fn crate_filter(level: &str) -> EnvFilter {
    let directives: Vec<String> = CRATES.iter().map(|c| format!("{c}={level}")).collect();
    EnvFilter::new(directives.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_take_precedence() {
        assert!(build_filter(true, false).is_some());
        assert!(build_filter(false, true).is_some());
        assert!(build_filter(false, false).is_none());
    }

    #[test]
    fn test_crate_filter_covers_every_crate() {
        let rendered = crate_filter("debug").to_string();
        for name in CRATES {
            assert!(rendered.contains(&format!("{name}=debug")), "{rendered}");
        }
    }
}
