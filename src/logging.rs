// src/logging.rs
// =============================================================================
// Logging setup.
//
// Logs go to stderr so they never mix with the table on stdout.
// By default only warnings are shown; -v turns on debug output for gitx and
// RUST_LOG (e.g. RUST_LOG=gitx=trace,reqwest=debug) overrides everything.
// =============================================================================

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
pub fn init_logging(verbose: u8) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

fn default_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "gitx=warn,reqwest=error",
        1 => "gitx=debug,reqwest=warn",
        _ => "gitx=trace,reqwest=debug",
    }
}
