//! Minimal process launcher.
//!
//! Spawns exactly one child, lets it write straight to our stdout/stderr,
//! waits for it, and turns the outcome into an exit code.
//!
//! Two argument sources share one code path:
//! - `SourceKind::Environment`: executable from `SPECTRON_NODE_PATH`, first
//!   argument from `SPECTRON_LAUNCHER_PATH`, then everything after argv[0].
//! - `SourceKind::CommandLine`: executable is the first argument, the rest
//!   are forwarded as-is.
//!
//! Binaries: `spectron-launcher` (environment) and `safe-exec` (command line).

pub mod config;
pub mod error;
pub mod invocation;
pub mod launch;
pub mod logging;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use config::{ArgSource, EnvSource, ExitPolicy, LaunchConfig, SourceKind};
pub use error::LaunchError;
pub use invocation::Invocation;
pub use launch::{launch, main_with, run, Outcome};
