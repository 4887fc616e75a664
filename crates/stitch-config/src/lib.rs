//! Bundler configuration composition.
//!
//! Part builders ([`parts`]) each produce one [`ConfigFragment`]; the
//! [`compose`] function discovers HTML templates, builds the common fragment
//! and the overlay for the chosen [`BuildMode`], and merges them with the
//! rules in [`merge`].

pub mod composer;
pub mod discovery;
pub mod env;
pub mod error;
pub mod fragment;
pub mod merge;
pub mod mode;
pub mod parts;
pub mod settings;
pub mod templates;
pub mod validation;

// Re-export main types
pub use composer::{
    compose, discover_pages, output_filename, ComposeContext, ProjectPaths, SettingsSource,
};
pub use env::{DevEnvironment, DEFAULT_DEV_PORT};
pub use error::*;
pub use fragment::*;
pub use merge::{merge_fragments, Merge};
pub use mode::BuildMode;
pub use settings::{AssetSettings, DevSettings, ProjectSettings, TranspileSettings};
pub use templates::{
    discover_templates, FsTemplateSource, StaticTemplateSource, TemplateInput, TemplateSource,
};

// Re-export discovery and validation
pub use discovery::{SettingsDiscovery, SETTINGS_FILE};
pub use validation::{validate_fs, validate_schema, FragmentValidator, FsValidator, SchemaValidator};
