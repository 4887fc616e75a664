use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Optimization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimize: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub minimizer: Vec<Minimizer>,
}

impl Optimization {
    /// Minification turned on with a single minimizer.
    pub fn minimize_with(minimizer: Minimizer) -> Self {
        Self {
            minimize: Some(true),
            minimizer: vec![minimizer],
        }
    }
}

/// A minifier registered with the bundler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "minimizer", rename_all = "kebab-case")]
pub enum Minimizer {
    /// Stylesheet minification
    Css,
    /// Script minification, optionally across worker threads
    Script { parallel: bool },
}
