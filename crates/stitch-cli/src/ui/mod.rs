//! Terminal output helpers.
//!
//! ```no_run
//! use stitch_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Configuration is valid");
//! ```

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::{detail, info, success, warning};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Silence status messages (`--quiet`). Errors are reported by miette and
/// are not affected.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if color output should be enabled.
///
/// `NO_COLOR` wins over `FORCE_COLOR`; otherwise colors follow whether
/// stderr is attended by a user.
pub fn should_use_color() -> bool {
    color_choice(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("FORCE_COLOR").is_some(),
        console::user_attended_stderr(),
    )
}

fn color_choice(no_color: bool, force_color: bool, attended: bool) -> bool {
    if no_color {
        return false;
    }
    if force_color {
        return true;
    }
    attended
}

/// Apply the color decision globally for owo-colors and console.
///
/// Returns whether colors ended up enabled.
pub fn init_colors(no_color_flag: bool) -> bool {
    let enabled = !no_color_flag && should_use_color();
    owo_colors::set_override(enabled);
    console::set_colors_enabled_stderr(enabled);
    enabled
}
