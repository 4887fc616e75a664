use crate::fragment::{
    ConfigFragment, LintOptions, LoaderOptions, LoaderUse, Minimizer, ModuleRule, Optimization,
    PluginSpec, RuleFilter, TranspileOptions,
};

pub const SCRIPT_TEST: &str = r"\.js$";

/// Transpile scripts. Callers normally exclude dependency directories.
pub fn script_transpile(filter: RuleFilter, options: TranspileOptions) -> ConfigFragment {
    ConfigFragment::from_rule(ModuleRule::new(
        SCRIPT_TEST,
        filter,
        vec![LoaderUse::with_options(
            "babel-loader",
            LoaderOptions::Transpile(options),
        )],
    ))
}

/// Minify scripts across worker threads.
pub fn script_minify() -> ConfigFragment {
    ConfigFragment {
        optimization: Some(Optimization::minimize_with(Minimizer::Script {
            parallel: true,
        })),
        ..ConfigFragment::default()
    }
}

/// Lint scripts during the build.
pub fn script_lint(options: LintOptions) -> ConfigFragment {
    ConfigFragment::from_plugin(PluginSpec::Lint(options))
}
