//! Tracing subscriber initialization for the command-line tool.
//!
//! The library only emits events; installing a subscriber is up to the host.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `debug` with `verbose`, `warn` without.
/// Returns `false` if a global subscriber was already installed.
pub fn init(verbose: bool) -> bool {
    let fallback = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
