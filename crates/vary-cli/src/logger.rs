//! Logging setup for the vary CLI.
//!
//! Diagnostics go through `tracing`; user-facing status lines go through
//! [`crate::ui`]. Both write to stderr so stdout stays machine-readable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "vary=debug,vary_config=debug,vary_cli=debug";
const QUIET_FILTER: &str = "vary=error,vary_config=error,vary_cli=error";
const DEFAULT_FILTER: &str = "vary=info,vary_config=info,vary_cli=info";

/// Initialize the tracing subscriber.
///
/// The filter is chosen in this order:
/// 1. `--verbose`: debug for vary crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`
/// 4. info for vary crates
///
/// Call once, before any logging happens.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Install the subscriber with the given filter.
fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` wins over `FORCE_COLOR`; otherwise stderr must be a terminal.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
