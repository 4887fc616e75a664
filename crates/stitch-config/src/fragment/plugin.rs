use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// A plugin registration, addressed by name and carrying its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", content = "options", rename_all = "kebab-case")]
pub enum PluginSpec {
    /// Empty the output directory before the build
    CleanOutput,
    /// Render one HTML page from a template
    HtmlTemplate(HtmlTemplateOptions),
    /// Copy static files into the output directory
    CopyAssets(CopyAssetsOptions),
    /// Write styles to standalone files
    ExtractCss(ExtractCssOptions),
    /// Static analysis over scripts during the build
    Lint(LintOptions),
}

impl PluginSpec {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CleanOutput => "clean-output",
            Self::HtmlTemplate(_) => "html-template",
            Self::CopyAssets(_) => "copy-assets",
            Self::ExtractCss(_) => "extract-css",
            Self::Lint(_) => "lint",
        }
    }
}

/// Where generated script tags are injected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectTarget {
    Head,
    #[default]
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlTemplateOptions {
    /// Absolute path of the source template
    pub template: PathBuf,

    #[serde(default)]
    pub inject: InjectTarget,

    /// Entry chunks referenced by the page
    #[serde(default)]
    pub chunks: Vec<String>,

    /// Output file name, relative to the output directory
    pub filename: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyAssetsOptions {
    pub patterns: Vec<CopyPattern>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPattern {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractCssOptions {
    pub filename: String,
    pub chunk_filename: String,
}

impl Default for ExtractCssOptions {
    fn default() -> Self {
        Self {
            filename: "[name].[contenthash].css".to_string(),
            chunk_filename: "[id].[contenthash].css".to_string(),
        }
    }
}

/// Lint options are forwarded untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LintOptions(pub Map<String, Value>);

impl From<Map<String, Value>> for LintOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
