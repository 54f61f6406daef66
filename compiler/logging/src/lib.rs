#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Simple logging utilities for the generator.

use std::sync::Once;

use tracing::Level;

static INIT: Once = Once::new();

/// Parse a level name (`trace`, `debug`, `info`, `warn`, `error`).
///
/// Unknown names fall back to `info`.
pub fn parse_level(level: &str) -> Level {
    level.trim().parse::<Level>().unwrap_or(Level::INFO)
}

/// Install a stderr subscriber at `level`.
///
/// Only the first call has an effect; later calls are ignored.
pub fn init(level: &str) {
    let level = parse_level(level);
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Emits a trace event with module prefix.
pub fn trace(module: &str, msg: &str) {
    tracing::trace!("[{}] {}", module, msg);
}
