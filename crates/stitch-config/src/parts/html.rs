use serde_json::Value;

use crate::fragment::{ConfigFragment, LoaderOptions, LoaderUse, ModuleRule, RuleFilter};

pub const HTML_TEST: &str = r"\.html$";

/// Process templated HTML: `ejs-html-loader` renders first, `html-loader`
/// resolves asset references in the result.
///
/// `options` are attached to the `html-loader` entry of the rule's `use`
/// list, not to the rule itself; `ejs-html-loader` never receives options.
pub fn html_template(filter: RuleFilter, options: Option<Value>) -> ConfigFragment {
    let html_loader = match options {
        Some(options) => LoaderUse::with_options("html-loader", LoaderOptions::Raw(options)),
        None => LoaderUse::new("html-loader"),
    };

    ConfigFragment::from_rule(ModuleRule::new(
        HTML_TEST,
        filter,
        vec![html_loader, LoaderUse::new("ejs-html-loader")],
    ))
}
