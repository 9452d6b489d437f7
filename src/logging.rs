//! Logging setup
//!
//! Installs a `tracing` fmt subscriber writing to stderr. `RUST_LOG` wins
//! when set; otherwise the configured level applies.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initialize the global tracing subscriber. Later calls are no-ops.
pub fn init_tracing(default_level: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_level))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
