use clap::ValueEnum;
use stitch_config::BuildMode;

/// Build profile to compose
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum Mode {
    /// Source maps, dev server, inline styles, unhashed output
    #[default]
    #[value(name = "development")]
    Development,

    /// Clean output, extracted styles, hashed names, minified scripts
    #[value(name = "production")]
    Production,
}

impl From<Mode> for BuildMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Development => BuildMode::Development,
            Mode::Production => BuildMode::Production,
        }
    }
}
