//! Command implementations.
//!
//! Each subcommand lives in its own module and exposes an `execute`
//! function taking the parsed arguments.

pub mod check;
pub mod config;
pub mod templates;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use config::execute as config_execute;
pub use templates::execute as templates_execute;
