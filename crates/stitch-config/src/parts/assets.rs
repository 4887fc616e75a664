use crate::fragment::{AssetOptions, ConfigFragment, LoaderOptions, LoaderUse, ModuleRule, RuleFilter};

pub const IMAGE_TEST: &str = r"\.(png|jpg|gif|svg)$";

/// Font files, optionally with a `?v=1.2.3` version query.
pub const FONT_TEST: &str = r"\.(eot|ttf|woff|woff2)(\?v=\d+\.\d+\.\d+)?$";

fn inline_rule(test: &str, filter: RuleFilter, options: AssetOptions) -> ConfigFragment {
    ConfigFragment::from_rule(ModuleRule::new(
        test,
        filter,
        vec![LoaderUse::with_options(
            "url-loader",
            LoaderOptions::Asset(options),
        )],
    ))
}

/// Inline images below `options.limit`, emit the rest under `options.name`.
pub fn image_loader(filter: RuleFilter, options: AssetOptions) -> ConfigFragment {
    inline_rule(IMAGE_TEST, filter, options)
}

/// Same inlining policy as [`image_loader`], for fonts.
pub fn font_loader(filter: RuleFilter, options: AssetOptions) -> ConfigFragment {
    inline_rule(FONT_TEST, filter, options)
}
