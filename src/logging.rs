//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
//! events of this crate with `--verbose`.

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directive for the given verbosity
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "sql_schema_parser=debug"
    } else {
        "sql_schema_parser=warn"
    }
}

/// Install the global subscriber. Repeated calls are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
