use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("environment variable {0} is unset or empty")]
    MissingEnv(&'static str),

    #[error("no executable given; usage: {0} <program> [args...]")]
    MissingProgram(&'static str),

    #[error("invalid value {value:?} for {var}; expected `collapse` or `preserve`")]
    InvalidExitPolicy { var: &'static str, value: String },

    #[error("failed to start {program}: {source}")]
    Start {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed waiting for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// True for errors detected before any process was started.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::MissingEnv(_) | Self::MissingProgram(_) | Self::InvalidExitPolicy { .. }
        )
    }

    /// Kind of the underlying OS error, if there is one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Start { source, .. } | Self::Wait { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
