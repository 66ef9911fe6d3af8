//! Diagnostics for the launcher itself.
//!
//! Off unless `SPECTRON_LAUNCHER_LOG` is set. Always written to stderr so the
//! child's stdout stays byte-identical.

use tracing_subscriber::EnvFilter;

/// `EnvFilter` directive for launcher diagnostics. `RUST_LOG` is left to the child.
pub const LOG_VAR: &str = "SPECTRON_LAUNCHER_LOG";

pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("off"))
}

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
