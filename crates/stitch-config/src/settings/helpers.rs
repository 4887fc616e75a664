use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_src_dir() -> PathBuf {
    PathBuf::from("src")
}

pub(crate) fn default_dist_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_entry_name() -> String {
    "app".to_string()
}

pub(crate) fn default_entry() -> PathBuf {
    PathBuf::from("js").join("index.js")
}

pub(crate) fn default_favicon() -> PathBuf {
    PathBuf::from("favicon.ico")
}

pub(crate) fn default_dependency_pattern() -> String {
    "(node_modules)".to_string()
}

pub(crate) fn default_font_name() -> String {
    "fonts/[name].[ext]".to_string()
}

pub(crate) fn default_font_limit() -> u64 {
    4096
}

pub(crate) fn default_dev_image_name() -> String {
    "[path][name].[ext]?hash=[hash:20]".to_string()
}

pub(crate) fn default_prod_image_name() -> String {
    "images/[name].[hash:20].[ext]".to_string()
}

pub(crate) fn default_image_limit() -> u64 {
    8192
}

pub(crate) fn default_presets() -> Vec<String> {
    vec!["@babel/preset-env".to_string()]
}
