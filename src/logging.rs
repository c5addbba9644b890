//! Diagnostic logging setup for the binary.
//!
//! Library code emits `tracing` events; nothing is printed unless the
//! binary installs a subscriber.  Events go to stderr so they never mix
//! with document content written to stdout.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "VAULTNOTE_LOG";

/// Install the global subscriber.
///
/// `VAULTNOTE_LOG` wins when set; otherwise `verbose` selects `debug`
/// and the default is `warn`.
pub fn init(verbose: bool) {
    let default_level = if verbose { "vaultnote=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
