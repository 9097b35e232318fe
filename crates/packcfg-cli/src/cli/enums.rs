use clap::ValueEnum;
use packcfg_config::Mode;

/// Build mode
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// Unminified output with source maps
    #[value(name = "development", alias = "dev")]
    Development,

    /// Optimized output
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Development => Mode::Development,
            ModeArg::Production => Mode::Production,
        }
    }
}
