//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the hot100 tracing/logging system.
///
/// Reads the `HOT100_LOG` environment variable for per-crate log levels.
/// Format: `HOT100_LOG=hot100_solutions=debug,hot100_core=warn`
///
/// Falls back to `hot100=info` if `HOT100_LOG` is not set or is invalid.
///
/// Idempotent. If another global subscriber is already installed, that
/// subscriber is kept.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
