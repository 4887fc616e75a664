//! Configuration fragments: partial, mergeable bundler configuration objects.
//!
//! A [`ConfigFragment`] is what every part builder returns and what the
//! composer hands back to the bundler driver. Absent keys are omitted when
//! serialized, so a fragment's JSON only carries what it actually sets.

mod dev_server;
mod optimization;
mod plugin;
mod rule;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::mode::BuildMode;

pub use dev_server::{ClientOptions, DevServerOptions};
pub use optimization::{Minimizer, Optimization};
pub use plugin::{
    CopyAssetsOptions, CopyPattern, ExtractCssOptions, HtmlTemplateOptions, InjectTarget,
    LintOptions, PluginSpec,
};
pub use rule::{AssetOptions, LoaderOptions, LoaderUse, ModuleRule, RuleFilter, TranspileOptions};

/// A partial bundler configuration.
///
/// List-valued keys (`module.rules`, `plugins`, `optimization.minimizer`)
/// concatenate on merge; everything else is a scalar or nested object that the
/// overlay overrides. See [`crate::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFragment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<BuildMode>,

    /// Named entry chunks
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub entry: IndexMap<String, PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<Devtool>,

    #[serde(default, skip_serializing_if = "ModuleOptions::is_empty")]
    pub module: ModuleOptions,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization: Option<Optimization>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerOptions>,
}

impl ConfigFragment {
    /// Fragment carrying a single module rule.
    pub fn from_rule(rule: ModuleRule) -> Self {
        Self {
            module: ModuleOptions { rules: vec![rule] },
            ..Self::default()
        }
    }

    /// Fragment carrying a single plugin registration.
    pub fn from_plugin(plugin: PluginSpec) -> Self {
        Self {
            plugins: vec![plugin],
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Rules in registration order.
    pub fn rules(&self) -> &[ModuleRule] {
        &self.module.rules
    }

    /// HTML template registrations in plugin order.
    pub fn html_templates(&self) -> impl Iterator<Item = &HtmlTemplateOptions> {
        self.plugins.iter().filter_map(|plugin| match plugin {
            PluginSpec::HtmlTemplate(options) => Some(options),
            _ => None,
        })
    }

    /// First rule whose `test` pattern is exactly `test`.
    pub fn rule_for(&self, test: &str) -> Option<&ModuleRule> {
        self.module.rules.iter().find(|rule| rule.test == test)
    }

    /// Output filename pattern, if any fragment set one.
    pub fn output_filename(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.filename.as_deref())
    }
}

/// Output naming and location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    /// Filename pattern for entry chunks (e.g. `app.[contenthash].js`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Absolute output directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
}

/// Source map style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
    /// External .map files (default)
    #[default]
    SourceMap,
    /// Inline source maps (base64)
    InlineSourceMap,
    /// Per-module eval with source maps
    EvalSourceMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleOptions {
    #[serde(default)]
    pub rules: Vec<ModuleRule>,
}

impl ModuleOptions {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
