//! Status message functions for terminal output.
//!
//! Everything goes to stderr so that `stitch config` can pipe JSON on stdout,
//! and nothing is printed under `--quiet`.

use owo_colors::OwoColorize;

use super::is_quiet;

/// Print a success message to stderr.
///
/// ```no_run
/// use stitch_cli::ui::success;
///
/// success("Configuration is valid");
/// ```
pub fn success(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    if is_quiet() {
        return;
    }
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print an indented detail line under the previous message.
pub fn detail(label: &str, value: impl std::fmt::Display) {
    if is_quiet() {
        return;
    }
    eprintln!("  {} {}", format!("{label}:").dimmed(), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        success("Success message");
        info("Info message");
        warning("Warning message");
        detail("rules", 5);
    }
}
