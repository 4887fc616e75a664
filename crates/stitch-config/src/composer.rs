//! Profile composition: common fragment plus one mode overlay.
//!
//! ```no_run
//! use stitch_config::{compose, BuildMode, ComposeContext};
//!
//! let ctx = ComposeContext::load(".").unwrap();
//! let config = compose(&ctx, BuildMode::Production).unwrap();
//! println!("{}", serde_json::to_string_pretty(&config).unwrap());
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::discovery::SettingsDiscovery;
use crate::env::DevEnvironment;
use crate::error::Result;
use crate::fragment::{
    AssetOptions, ConfigFragment, CopyAssetsOptions, CopyPattern, HtmlTemplateOptions,
    InjectTarget, LintOptions, OutputOptions, PluginSpec, RuleFilter,
};
use crate::merge::merge_fragments;
use crate::mode::BuildMode;
use crate::parts::{
    clean_output, dev_server, font_loader, html_template, image_loader, script_lint,
    script_minify, script_transpile, style_extract, style_inline, DevServerParams,
};
use crate::settings::{raw_src_dir, ProjectSettings};
use crate::templates::{discover_templates, FsTemplateSource, TemplateInput, TemplateSource};

/// Absolute project paths for one mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub src: PathBuf,
    pub dist: PathBuf,
}

impl ProjectPaths {
    /// Resolve against `root` using already mode-adjusted settings.
    pub fn resolve(root: impl AsRef<Path>, settings: &ProjectSettings) -> Result<Self> {
        let root = std::path::absolute(root.as_ref())?;
        Ok(Self {
            src: root.join(&settings.src_dir),
            dist: root.join(&settings.dist_dir),
            root,
        })
    }

    /// Entry script path
    pub fn entry(&self, settings: &ProjectSettings) -> PathBuf {
        self.src.join(&settings.entry)
    }

    /// Favicon path
    pub fn favicon(&self, settings: &ProjectSettings) -> PathBuf {
        self.src.join(&settings.favicon)
    }
}

/// Where composition takes project settings from.
#[derive(Debug, Clone)]
pub enum SettingsSource {
    /// `stitch.toml` or `package.json`, read during composition
    Discover(SettingsDiscovery),
    /// Settings already in hand
    Inline(ProjectSettings),
}

impl SettingsSource {
    /// Source directory for `mode`, without checking the rest of the settings.
    fn src_dir(&self, mode: BuildMode) -> PathBuf {
        match self {
            Self::Discover(discovery) => match discovery.load_value() {
                Ok(Some(value)) => raw_src_dir(&value, mode),
                _ => ProjectSettings::default().src_dir,
            },
            Self::Inline(settings) => settings.src_dir_for(mode),
        }
    }

    /// Fully parsed settings with the `mode` profile applied.
    fn resolve(&self, mode: BuildMode) -> Result<ProjectSettings> {
        match self {
            Self::Discover(discovery) => discovery.load_or_default()?.for_mode(mode),
            Self::Inline(settings) => settings.clone().for_mode(mode),
        }
    }
}

impl From<ProjectSettings> for SettingsSource {
    fn from(settings: ProjectSettings) -> Self {
        Self::Inline(settings)
    }
}

/// Everything composition reads, passed explicitly.
///
/// Nothing here is parsed up front: settings and environment are read by
/// [`compose`] after the template check.
#[derive(Debug, Clone)]
pub struct ComposeContext<S = FsTemplateSource> {
    pub root: PathBuf,
    pub settings: SettingsSource,
    pub env: DevEnvironment,
    pub templates: S,
}

impl ComposeContext<FsTemplateSource> {
    /// Context for the project at `root`: discovered settings, the process
    /// environment and the real filesystem.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = std::path::absolute(root.as_ref())?;
        Ok(Self {
            settings: SettingsSource::Discover(SettingsDiscovery::new(&root)),
            env: DevEnvironment::Process,
            templates: FsTemplateSource,
            root,
        })
    }
}

impl<S: TemplateSource> ComposeContext<S> {
    pub fn new(
        root: impl AsRef<Path>,
        settings: impl Into<SettingsSource>,
        env: DevEnvironment,
        templates: S,
    ) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            settings: settings.into(),
            env,
            templates,
        }
    }
}

/// Templates for `mode`: the first step of [`compose`].
///
/// Only the source directory is taken from the settings, leniently, so a
/// missing page is reported even when the settings are broken.
pub fn discover_pages<S: TemplateSource>(
    ctx: &ComposeContext<S>,
    mode: BuildMode,
) -> Result<Vec<TemplateInput>> {
    let src = std::path::absolute(ctx.root.join(ctx.settings.src_dir(mode)))?;
    discover_templates(&ctx.templates, &src)
}

/// Compose the final configuration for `mode`.
///
/// Template discovery runs first and is the only validation; when it fails
/// nothing else is read. Settings (with the mode profile) come next, then
/// the common fragment with the mode overlay merged on top. `PORT` is read
/// by the development overlay only.
pub fn compose<S: TemplateSource>(ctx: &ComposeContext<S>, mode: BuildMode) -> Result<ConfigFragment> {
    let templates = discover_pages(ctx, mode)?;

    let settings = ctx.settings.resolve(mode)?;
    let paths = ProjectPaths::resolve(&ctx.root, &settings)?;
    info!(%mode, templates = templates.len(), "composing configuration");

    let common = common_fragment(&paths, &settings, &templates, mode);
    let overlay = match mode {
        BuildMode::Development => development_fragment(&ctx.env, &settings)?,
        BuildMode::Production => production_fragment(&settings),
    };

    let config = common.merged(overlay);
    debug!(
        rules = config.rules().len(),
        plugins = config.plugins.len(),
        "configuration composed"
    );
    Ok(config)
}

/// Output filename for the entry chunk: hashed outside development.
pub fn output_filename(entry_name: &str, mode: BuildMode) -> String {
    if mode.is_development() {
        format!("{entry_name}.js")
    } else {
        format!("{entry_name}.[contenthash].js")
    }
}

fn common_fragment(
    paths: &ProjectPaths,
    settings: &ProjectSettings,
    templates: &[TemplateInput],
    mode: BuildMode,
) -> ConfigFragment {
    let favicon = paths.favicon(settings);

    let mut base = ConfigFragment {
        mode: Some(mode),
        output: Some(OutputOptions {
            filename: Some(output_filename(&settings.entry_name, mode)),
            path: Some(paths.dist.clone()),
            public_path: Some(settings.public_path.clone()),
        }),
        ..ConfigFragment::default()
    };
    base.entry
        .insert(settings.entry_name.clone(), paths.entry(settings));

    base.plugins.extend(templates.iter().map(|template| {
        PluginSpec::HtmlTemplate(HtmlTemplateOptions {
            template: template.path.clone(),
            inject: InjectTarget::Body,
            chunks: vec![settings.entry_name.clone()],
            filename: template.file_name.clone(),
            favicon: Some(favicon.clone()),
        })
    }));

    let copy_to = settings
        .favicon
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.favicon.clone());
    base.plugins.push(PluginSpec::CopyAssets(CopyAssetsOptions {
        patterns: vec![CopyPattern {
            from: favicon,
            to: copy_to,
        }],
    }));

    let dependencies = RuleFilter::exclude(settings.dependency_pattern.clone());

    merge_fragments([
        base,
        font_loader(
            RuleFilter::default(),
            AssetOptions::new(settings.assets.font_name.clone(), settings.assets.font_limit),
        ),
        script_lint(LintOptions(settings.lint.clone())),
        script_transpile(dependencies.clone(), settings.transpile.clone().into()),
        html_template(dependencies, None),
    ])
}

fn development_fragment(env: &DevEnvironment, settings: &ProjectSettings) -> Result<ConfigFragment> {
    let port = env.resolve_port(settings.dev.port)?;

    Ok(merge_fragments([
        ConfigFragment {
            devtool: Some(settings.dev.devtool),
            ..ConfigFragment::default()
        },
        dev_server(DevServerParams {
            host: settings.dev.host.clone(),
            port: Some(port),
        }),
        style_inline(RuleFilter::default()),
        image_loader(
            RuleFilter::default(),
            AssetOptions::new(
                settings.assets.dev_image_name.clone(),
                settings.assets.image_limit,
            ),
        ),
    ]))
}

fn production_fragment(settings: &ProjectSettings) -> ConfigFragment {
    merge_fragments([
        clean_output(),
        style_extract(RuleFilter::default()),
        image_loader(
            RuleFilter::default(),
            AssetOptions::new(
                settings.assets.prod_image_name.clone(),
                settings.assets.image_limit,
            ),
        ),
        script_minify(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::{Devtool, Minimizer};
    use crate::parts::{FONT_TEST, HTML_TEST, IMAGE_TEST, SCRIPT_TEST, STYLE_TEST};
    use crate::templates::StaticTemplateSource;
    use crate::ConfigError;
    use figment::Jail;

    fn context_with(settings: ProjectSettings, names: &[&str]) -> ComposeContext<StaticTemplateSource> {
        ComposeContext::new(
            "/project",
            settings,
            DevEnvironment::default(),
            StaticTemplateSource::new(names.iter().copied()),
        )
    }

    fn context(names: &[&str]) -> ComposeContext<StaticTemplateSource> {
        context_with(ProjectSettings::default(), names)
    }

    fn rule_tests(config: &ConfigFragment) -> Vec<&str> {
        config.rules().iter().map(|r| r.test.as_str()).collect()
    }

    #[test]
    fn filename_hash_only_outside_development() {
        assert_eq!(output_filename("app", BuildMode::Development), "app.js");
        assert_eq!(
            output_filename("app", BuildMode::Production),
            "app.[contenthash].js"
        );
    }

    #[test]
    fn development_profile() {
        let config = compose(&context(&["index.html"]), BuildMode::Development).unwrap();

        assert_eq!(config.mode, Some(BuildMode::Development));
        assert_eq!(config.devtool, Some(Devtool::SourceMap));
        assert_eq!(config.output_filename(), Some("app.js"));
        assert_eq!(config.dev_server.as_ref().and_then(|d| d.port), Some(8080));
        assert!(config.optimization.is_none());
        assert!(!config.plugins.contains(&PluginSpec::CleanOutput));
        assert_eq!(
            rule_tests(&config),
            [FONT_TEST, SCRIPT_TEST, HTML_TEST, STYLE_TEST, IMAGE_TEST]
        );
    }

    #[test]
    fn production_profile() {
        let config = compose(&context(&["index.html"]), BuildMode::Production).unwrap();

        assert_eq!(config.mode, Some(BuildMode::Production));
        assert!(config.devtool.is_none());
        assert!(config.dev_server.is_none());
        assert_eq!(config.output_filename(), Some("app.[contenthash].js"));

        let names: Vec<_> = config.plugins.iter().map(PluginSpec::name).collect();
        assert_eq!(
            names,
            ["html-template", "copy-assets", "lint", "clean-output", "extract-css"]
        );

        let optimization = config.optimization.expect("optimization");
        assert_eq!(optimization.minimize, Some(true));
        assert_eq!(
            optimization.minimizer,
            vec![Minimizer::Css, Minimizer::Script { parallel: true }]
        );
    }

    #[test]
    fn one_registration_per_template() {
        let config =
            compose(&context(&["index.html", "about.html", "logo.png"]), BuildMode::Production)
                .unwrap();

        let pages: Vec<_> = config.html_templates().collect();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].filename, "about.html");
        assert_eq!(pages[1].filename, "index.html");
        for page in pages {
            assert_eq!(page.chunks, ["app"]);
            assert_eq!(page.inject, InjectTarget::Body);
            assert_eq!(page.favicon, Some(PathBuf::from("/project/src/favicon.ico")));
            assert_eq!(page.template, PathBuf::from("/project/src").join(&page.filename));
        }
    }

    #[test]
    fn no_templates_fails_before_composition() {
        let err = compose(&context(&["index.js", "favicon.ico"]), BuildMode::Development)
            .unwrap_err();
        assert!(matches!(err, ConfigError::NoTemplates { ref dir } if dir == "src"));
    }

    #[test]
    fn env_port_overrides_settings_port() {
        let mut settings = ProjectSettings::default();
        settings.dev.port = Some(3000);
        let mut ctx = context_with(settings, &["index.html"]);
        ctx.env = DevEnvironment::Fixed { port: Some(9000) };

        let config = compose(&ctx, BuildMode::Development).unwrap();
        assert_eq!(config.dev_server.and_then(|d| d.port), Some(9000));
    }

    #[test]
    fn production_never_reads_port() {
        Jail::expect_with(|jail| {
            jail.set_env("PORT", "http");
            let mut ctx = context(&["index.html"]);
            ctx.env = DevEnvironment::Process;

            assert!(compose(&ctx, BuildMode::Production).is_ok());
            let err = compose(&ctx, BuildMode::Development).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidEnvironment(_)));
            Ok(())
        });
    }

    #[test]
    fn missing_templates_reported_before_bad_port() {
        Jail::expect_with(|jail| {
            jail.set_env("PORT", "http");
            let mut ctx = context(&["index.js"]);
            ctx.env = DevEnvironment::Process;

            let err = compose(&ctx, BuildMode::Development).unwrap_err();
            assert!(matches!(err, ConfigError::NoTemplates { .. }));
            Ok(())
        });
    }

    #[test]
    fn mode_profile_moves_output_and_source() {
        let settings = ProjectSettings::from_value(serde_json::json!({
            "profiles": { "production": { "dist_dir": "build", "src_dir": "pages" } }
        }))
        .unwrap();
        let ctx = context_with(settings, &["index.html"]);

        let prod = compose(&ctx, BuildMode::Production).unwrap();
        let output = prod.output.as_ref().expect("output");
        assert_eq!(output.path, Some(PathBuf::from("/project/build")));
        let page = prod.html_templates().next().expect("page");
        assert_eq!(page.template, PathBuf::from("/project/pages/index.html"));
        assert_eq!(prod.entry["app"], PathBuf::from("/project/pages/js/index.js"));

        let dev = compose(&ctx, BuildMode::Development).unwrap();
        assert_eq!(
            dev.output.and_then(|o| o.path),
            Some(PathBuf::from("/project/dist"))
        );
    }

    #[test]
    fn entry_and_output_paths_are_absolute() {
        let config = compose(&context(&["index.html"]), BuildMode::Development).unwrap();
        assert_eq!(
            config.entry["app"],
            PathBuf::from("/project/src").join("js").join("index.js")
        );
        let output = config.output.expect("output");
        assert_eq!(output.path, Some(PathBuf::from("/project/dist")));
        assert_eq!(output.public_path.as_deref(), Some(""));
    }
}
