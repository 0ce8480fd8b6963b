use super::config::LogLevel;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the global tracing subscriber for bridge diagnostics.
///
/// Diagnostics go to stderr; stdout is reserved for fatal human-readable
/// messages. Safe to call more than once, later calls are no-ops.
pub fn init_tracing(level: LogLevel) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let default_level: tracing::Level = level.into();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init();
    });
}
