//! Diagnostic logging setup
//!
//! Log events go to stderr so they never interleave with session output on
//! stdout. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber
///
/// Default is `warn`, or `debug` for roster itself when `verbose` is set.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // A subscriber may already be installed when embedded; keep that one
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose { "warn,roster=debug" } else { "warn" }
}
