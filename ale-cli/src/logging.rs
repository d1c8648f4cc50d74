//! Tracing setup
//!
//! Diagnostics go to stderr so stdout only ever carries converted data. `RUST_LOG`
//! wins over everything; otherwise `--debug` selects `debug`, else the configured level.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init_tracing(debug: bool, configured_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug, configured_level)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(debug: bool, configured_level: &str) -> &str {
    if debug {
        "debug"
    } else {
        configured_level
    }
}
