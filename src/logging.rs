//! Tracing subscriber setup for the binary.
//!
//! Logs go to stderr so stdout only carries the `key=value` outputs.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects between `debug` and
/// `warn` for this crate.
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "cmake_bump=debug"
    } else {
        "cmake_bump=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
