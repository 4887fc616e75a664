//! Part builders.
//!
//! Each builder is a pure function from a small options value to a
//! [`ConfigFragment`] covering exactly one concern. None of them validate
//! their options; see [`crate::validation`] for the opt-in checks.
//!
//! [`ConfigFragment`]: crate::fragment::ConfigFragment

mod assets;
mod clean;
mod dev_server;
mod html;
mod scripts;
mod styles;

pub use assets::{font_loader, image_loader, FONT_TEST, IMAGE_TEST};
pub use clean::clean_output;
pub use dev_server::{dev_server, DevServerParams};
pub use html::{html_template, HTML_TEST};
pub use scripts::{script_lint, script_minify, script_transpile, SCRIPT_TEST};
pub use styles::{style_extract, style_inline, STYLE_TEST};
