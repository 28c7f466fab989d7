//! Tracing setup for the command-line tool.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a compact stderr subscriber.
///
/// The default level is `info`, raised to `debug` by one `-v` and `trace` by
/// two or more. `RUST_LOG` overrides both.
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
