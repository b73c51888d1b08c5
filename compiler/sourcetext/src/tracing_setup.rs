//! Opt-in log output for binaries and tests that embed this crate.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=sourcetext=debug` or `RUST_LOG=sourcetext=trace`.
/// Does nothing when `RUST_LOG` is unset, leaving the embedding program free
/// to install its own subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A subscriber installed elsewhere wins; ignore the conflict.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
