//! Diagnostics via `tracing`, written to stderr.
//!
//! The level is controlled by the `WTCONF_LOG` environment variable and
//! defaults to `warn` so the menu stays readable:
//!
//! ```bash
//! WTCONF_LOG=debug wtconf
//! ```

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "WTCONF_LOG";

/// Install the global subscriber. Calling this more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
