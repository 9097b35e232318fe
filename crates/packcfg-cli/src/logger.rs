//! Logging infrastructure for the packcfg CLI.
//!
//! Uses the `tracing` ecosystem. Verbosity comes from `--verbose`/`--quiet`,
//! otherwise from `RUST_LOG`, falling back to info level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "packcfg=debug,packcfg_cli=debug,packcfg_config=debug";
const QUIET_FILTER: &str = "packcfg=error,packcfg_cli=error,packcfg_config=error";
const DEFAULT_FILTER: &str = "packcfg=info,packcfg_cli=info,packcfg_config=info";

/// Pick the filter for the given flags.
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for packcfg crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. Default: INFO for packcfg crates
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging.
///
/// Logs go to stderr so that stdout stays reserved for command output.
/// `color` is the resolved decision from [`crate::ui::init_colors`], so
/// `--no-color`, `NO_COLOR` and `FORCE_COLOR` apply to logs as well.
pub fn init_logger(verbose: bool, quiet: bool, color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(color)
        .compact();

    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .init();
}
