use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Optional path filters accepted by every rule-producing builder.
///
/// Both are regular expression sources. Absent filters apply everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
}

impl RuleFilter {
    pub fn include(pattern: impl Into<String>) -> Self {
        Self {
            include: Some(pattern.into()),
            exclude: None,
        }
    }

    pub fn exclude(pattern: impl Into<String>) -> Self {
        Self {
            include: None,
            exclude: Some(pattern.into()),
        }
    }
}

/// One module rule: a file pattern and the loader chain applied to matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRule {
    /// Regular expression matched against the module path
    pub test: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// Loaders, in the order the bundler lists them
    #[serde(rename = "use")]
    pub uses: Vec<LoaderUse>,
}

impl ModuleRule {
    pub fn new(test: impl Into<String>, filter: RuleFilter, uses: Vec<LoaderUse>) -> Self {
        Self {
            test: test.into(),
            include: filter.include,
            exclude: filter.exclude,
            uses,
        }
    }

    pub fn loader_names(&self) -> impl Iterator<Item = &str> {
        self.uses.iter().map(|u| u.loader.as_str())
    }

    /// Whether this rule would apply to `path`.
    ///
    /// `test` must match, `include` (when set) must match and `exclude`
    /// (when set) must not.
    pub fn applies_to(&self, path: &str) -> Result<bool> {
        if !compile("test", &self.test)?.is_match(path) {
            return Ok(false);
        }
        if let Some(include) = &self.include {
            if !compile("include", include)?.is_match(path) {
                return Ok(false);
            }
        }
        if let Some(exclude) = &self.exclude {
            if compile("exclude", exclude)?.is_match(path) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Compile every pattern on the rule, reporting the first bad one.
    pub fn check_patterns(&self) -> Result<()> {
        compile("test", &self.test)?;
        if let Some(include) = &self.include {
            compile("include", include)?;
        }
        if let Some(exclude) = &self.exclude {
            compile("exclude", exclude)?;
        }
        Ok(())
    }
}

fn compile(field: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| ConfigError::SchemaValidation {
        message: format!("rule {field} pattern '{pattern}' is not a valid regular expression"),
        hint: Some(e.to_string()),
    })
}

/// A loader reference with its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderUse {
    pub loader: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<LoaderOptions>,
}

impl LoaderUse {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: None,
        }
    }

    pub fn with_options(loader: impl Into<String>, options: LoaderOptions) -> Self {
        Self {
            loader: loader.into(),
            options: Some(options),
        }
    }
}

/// Options forwarded to a loader unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoaderOptions {
    Asset(AssetOptions),
    Transpile(TranspileOptions),
    Raw(Value),
}

/// Inlining policy for images and fonts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetOptions {
    /// Naming pattern for emitted files
    pub name: String,

    /// Files below this many bytes are inlined as data URLs
    pub limit: u64,
}

impl AssetOptions {
    pub fn new(name: impl Into<String>, limit: u64) -> Self {
        Self {
            name: name.into(),
            limit,
        }
    }
}

/// Transpiler settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranspileOptions {
    pub presets: Vec<String>,
}
