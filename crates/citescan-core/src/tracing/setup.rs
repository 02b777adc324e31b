//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the citescan tracing/logging system.
///
/// Reads the `CITESCAN_LOG` environment variable for per-subsystem log
/// levels. Format: `CITESCAN_LOG=citescan_corpus=debug,citescan_analysis=info`
///
/// Falls back to `citescan=info` if `CITESCAN_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CITESCAN_LOG")
            .unwrap_or_else(|_| EnvFilter::new("citescan=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
