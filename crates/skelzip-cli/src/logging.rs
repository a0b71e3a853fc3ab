//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays reserved for progress lines and
//! summaries. The filter is read from `SKELZIP_LOG` using the usual
//! `EnvFilter` directive syntax.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SKELZIP_LOG";

/// Installs the global subscriber.
///
/// Without `SKELZIP_LOG` the level is `warn`, or `debug` when `verbose` is set.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
