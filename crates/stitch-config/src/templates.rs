//! HTML template discovery.
//!
//! Every `.html` file in the source directory becomes one output page. At
//! least one is required; [`discover_templates`] is the gate that enforces it
//! before any fragment is built.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

const TEMPLATE_SUFFIX: &str = ".html";

/// A discovered template, one per output page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInput {
    /// File name, reused as the output page name
    pub file_name: String,
    /// Absolute path of the template
    pub path: PathBuf,
}

/// Where template file names come from.
pub trait TemplateSource {
    /// Names of the entries in `dir`.
    fn file_names(&self, dir: &Path) -> Result<Vec<String>>;
}

/// Lists regular files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTemplateSource;

impl TemplateSource for FsTemplateSource {
    fn file_names(&self, dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }
}

/// In-memory file list, for embedding and tests. The directory is ignored.
#[derive(Debug, Clone, Default)]
pub struct StaticTemplateSource {
    names: Vec<String>,
}

impl StaticTemplateSource {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl TemplateSource for StaticTemplateSource {
    fn file_names(&self, _dir: &Path) -> Result<Vec<String>> {
        Ok(self.names.clone())
    }
}

impl<T: TemplateSource + ?Sized> TemplateSource for &T {
    fn file_names(&self, dir: &Path) -> Result<Vec<String>> {
        (**self).file_names(dir)
    }
}

/// Find the templates under `src_dir`, sorted by file name.
///
/// `src_dir` is the directory listed, the base of the template paths and the
/// name reported when nothing is found.
pub fn discover_templates(
    source: &impl TemplateSource,
    src_dir: &Path,
) -> Result<Vec<TemplateInput>> {
    let mut names: Vec<String> = source
        .file_names(src_dir)?
        .into_iter()
        .filter(|name| name.ends_with(TEMPLATE_SUFFIX))
        .collect();

    if names.is_empty() {
        let dir = src_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| src_dir.display().to_string());
        return Err(ConfigError::NoTemplates { dir });
    }

    names.sort();
    debug!(count = names.len(), "discovered html templates");

    Ok(names
        .into_iter()
        .map(|file_name| TemplateInput {
            path: src_dir.join(&file_name),
            file_name,
        })
        .collect())
}
