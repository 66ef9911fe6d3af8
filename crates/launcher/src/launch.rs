//! Start, wait, and classify.
//!
//! `Start` → (`StartFailed` → exit) | (`Started` → `Wait` → (`WaitFailed` | `Completed`) → exit).
//! Each invocation runs this once; nothing is retried.

use std::ffi::OsString;
use std::io;
use std::process::{ExitCode, ExitStatus};

use crate::config::{ExitPolicy, LaunchConfig, SourceKind};
use crate::error::LaunchError;
use crate::invocation::Invocation;
use crate::logging;

/// Code for configuration errors under `ExitPolicy::Preserve`.
pub const CONFIG_ERROR_CODE: u8 = 2;
/// Executable exists but could not be executed (shell convention).
pub const NOT_EXECUTABLE_CODE: u8 = 126;
/// Executable not found (shell convention).
pub const NOT_FOUND_CODE: u8 = 127;

/// Spawn the child and block until it terminates.
///
/// A nonzero child status is not an error here; see `Outcome`.
pub fn run(invocation: &Invocation) -> Result<ExitStatus, LaunchError> {
    let program = invocation.program().to_string_lossy().into_owned();
    let mut child = invocation
        .command()
        .spawn()
        .map_err(|source| LaunchError::Start {
            program: program.clone(),
            source,
        })?;
    tracing::debug!(program, pid = child.id(), "started");
    let status = child
        .wait()
        .map_err(|source| LaunchError::Wait { program, source })?;
    tracing::debug!(?status, "child exited");
    Ok(status)
}

/// Final state of one launch.
#[derive(Debug)]
pub enum Outcome {
    Completed,
    ChildFailed(ExitStatus),
    NotLaunched(LaunchError),
}

impl From<Result<ExitStatus, LaunchError>> for Outcome {
    fn from(result: Result<ExitStatus, LaunchError>) -> Self {
        match result {
            Ok(status) if status.success() => Self::Completed,
            Ok(status) => Self::ChildFailed(status),
            Err(e) => Self::NotLaunched(e),
        }
    }
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn exit_code(&self, policy: ExitPolicy) -> u8 {
        match (policy, self) {
            (_, Self::Completed) => 0,
            (ExitPolicy::Collapse, _) => 1,
            (ExitPolicy::Preserve, Self::ChildFailed(status)) => status_code(status),
            (ExitPolicy::Preserve, Self::NotLaunched(e)) if e.is_config() => CONFIG_ERROR_CODE,
            (ExitPolicy::Preserve, Self::NotLaunched(e @ LaunchError::Start { .. })) => {
                match e.io_kind() {
                    Some(io::ErrorKind::NotFound) => NOT_FOUND_CODE,
                    Some(io::ErrorKind::PermissionDenied) => NOT_EXECUTABLE_CODE,
                    _ => 1,
                }
            }
            (ExitPolicy::Preserve, Self::NotLaunched(_)) => 1,
        }
    }
}

fn status_code(status: &ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        // Out-of-range codes (Windows) cannot be represented; fall back to 1.
        return match u8::try_from(code) {
            Ok(0) | Err(_) => 1,
            Ok(c) => c,
        };
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return u8::try_from(128 + sig).unwrap_or(1);
        }
    }
    1
}

/// Resolve the invocation for `argv` (arguments after argv[0]) and run it.
pub fn launch<I>(config: &LaunchConfig, argv: I) -> Outcome
where
    I: IntoIterator<Item = OsString>,
{
    let outcome = Outcome::from(
        Invocation::resolve(&config.source, argv).and_then(|invocation| {
            tracing::debug!(
                program = ?invocation.program(),
                args = ?invocation.args(),
                "resolved invocation"
            );
            run(&invocation)
        }),
    );
    match &outcome {
        Outcome::NotLaunched(e) => tracing::error!(error = %e, "launch failed"),
        Outcome::ChildFailed(status) => tracing::warn!(?status, "child failed"),
        Outcome::Completed => {}
    }
    outcome
}

/// Entry point shared by the binaries.
pub fn main_with(kind: SourceKind) -> ExitCode {
    logging::init();
    let (outcome, policy) = match LaunchConfig::from_env(kind) {
        Ok(config) => (launch(&config, std::env::args_os().skip(1)), config.exit_policy),
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            // The policy itself may be what failed to load.
            (Outcome::NotLaunched(e), ExitPolicy::from_env().unwrap_or_default())
        }
    };
    ExitCode::from(outcome.exit_code(policy))
}
