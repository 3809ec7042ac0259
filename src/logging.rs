//! Logging configuration and initialization

use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing/logging for the application.
///
/// `RUST_LOG` wins over the verbosity flag when set. Logs go to stderr so
/// that report output on stdout stays machine-readable.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2) // Show target module for -vv and above
        .with_line_number(verbosity >= 3) // Show line numbers for -vvv
        .init();

    debug!("roascalc started with verbosity level: {}", verbosity);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
