use crate::fragment::{
    ConfigFragment, ExtractCssOptions, LoaderUse, Minimizer, ModuleRule, Optimization, PluginSpec,
    RuleFilter,
};

pub const STYLE_TEST: &str = r"\.(css|scss)$";

const EXTRACT_LOADER: &str = "mini-css-extract-loader";

fn compile_chain(first: &str) -> Vec<LoaderUse> {
    vec![
        LoaderUse::new(first),
        LoaderUse::new("css-loader"),
        LoaderUse::new("sass-loader"),
    ]
}

/// Compile styles and inject them at runtime through style tags.
pub fn style_inline(filter: RuleFilter) -> ConfigFragment {
    ConfigFragment::from_rule(ModuleRule::new(
        STYLE_TEST,
        filter,
        compile_chain("style-loader"),
    ))
}

/// Compile styles into standalone hashed files and minify them.
pub fn style_extract(filter: RuleFilter) -> ConfigFragment {
    ConfigFragment {
        plugins: vec![PluginSpec::ExtractCss(ExtractCssOptions::default())],
        optimization: Some(Optimization::minimize_with(Minimizer::Css)),
        ..ConfigFragment::from_rule(ModuleRule::new(
            STYLE_TEST,
            filter,
            compile_chain(EXTRACT_LOADER),
        ))
    }
}
