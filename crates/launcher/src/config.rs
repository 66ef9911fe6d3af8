//! Launcher configuration, read once from the environment.
//!
//! Nothing outside this module touches `std::env`; everything downstream
//! receives an explicit `LaunchConfig`.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::LaunchError;

/// Executable to launch in the environment-driven variant.
pub const NODE_PATH_VAR: &str = "SPECTRON_NODE_PATH";
/// Value prepended as the child's first argument in the environment-driven variant.
pub const LAUNCHER_PATH_VAR: &str = "SPECTRON_LAUNCHER_PATH";
/// `collapse` (default) or `preserve`.
pub const EXIT_CODE_VAR: &str = "SPECTRON_LAUNCHER_EXIT_CODE";

/// Name used in the usage hint of the command-line variant.
pub const CLI_BIN_NAME: &str = "safe-exec";

/// Inputs of the environment-driven variant, both guaranteed non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvSource {
    node_path: PathBuf,
    launcher_path: OsString,
}

impl EnvSource {
    pub fn new(
        node_path: impl Into<PathBuf>,
        launcher_path: impl Into<OsString>,
    ) -> Result<Self, LaunchError> {
        let node_path = node_path.into();
        let launcher_path = launcher_path.into();
        if node_path.as_os_str().is_empty() {
            return Err(LaunchError::MissingEnv(NODE_PATH_VAR));
        }
        if launcher_path.is_empty() {
            return Err(LaunchError::MissingEnv(LAUNCHER_PATH_VAR));
        }
        Ok(Self {
            node_path,
            launcher_path,
        })
    }

    pub fn from_env() -> Result<Self, LaunchError> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build from an arbitrary variable lookup. Unset and empty are the same.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LaunchError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let node_path = lookup(NODE_PATH_VAR).unwrap_or_default();
        let launcher_path = lookup(LAUNCHER_PATH_VAR).unwrap_or_default();
        Self::new(node_path, launcher_path)
    }

    pub fn node_path(&self) -> &PathBuf {
        &self.node_path
    }

    pub fn launcher_path(&self) -> &OsString {
        &self.launcher_path
    }
}

/// Where the executable and its arguments come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgSource {
    Environment(EnvSource),
    CommandLine,
}

/// Argument source chosen by a binary, before any environment is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Environment,
    CommandLine,
}

impl SourceKind {
    pub fn load(self) -> Result<ArgSource, LaunchError> {
        match self {
            Self::Environment => EnvSource::from_env().map(ArgSource::Environment),
            Self::CommandLine => Ok(ArgSource::CommandLine),
        }
    }
}

/// How outcomes are mapped to the launcher's own exit code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExitPolicy {
    /// Every failure exits 1.
    #[default]
    Collapse,
    /// Surface the child's status and distinct codes for launch failures.
    Preserve,
}

impl ExitPolicy {
    pub fn from_env() -> Result<Self, LaunchError> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, LaunchError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let Some(raw) = lookup(EXIT_CODE_VAR) else {
            return Ok(Self::default());
        };
        let value = raw.to_string_lossy();
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "collapse" => Ok(Self::Collapse),
            "preserve" => Ok(Self::Preserve),
            _ => Err(LaunchError::InvalidExitPolicy {
                var: EXIT_CODE_VAR,
                value: value.into_owned(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchConfig {
    pub source: ArgSource,
    pub exit_policy: ExitPolicy,
}

impl LaunchConfig {
    pub fn new(source: ArgSource, exit_policy: ExitPolicy) -> Self {
        Self {
            source,
            exit_policy,
        }
    }

    pub fn from_env(kind: SourceKind) -> Result<Self, LaunchError> {
        Ok(Self::new(kind.load()?, ExitPolicy::from_env()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, OsString> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect()
    }

    #[test]
    fn env_source_reads_both_values() {
        let env = vars(&[(NODE_PATH_VAR, "/bin/echo"), (LAUNCHER_PATH_VAR, "marker")]);
        let src = EnvSource::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(src.node_path(), &PathBuf::from("/bin/echo"));
        assert_eq!(src.launcher_path(), &OsString::from("marker"));
    }

    #[test]
    fn env_source_rejects_unset_and_empty_node_path() {
        let unset = vars(&[(LAUNCHER_PATH_VAR, "marker")]);
        let err = EnvSource::from_lookup(|k| unset.get(k).cloned()).unwrap_err();
        assert!(matches!(err, LaunchError::MissingEnv(NODE_PATH_VAR)));

        let empty = vars(&[(NODE_PATH_VAR, ""), (LAUNCHER_PATH_VAR, "marker")]);
        let err = EnvSource::from_lookup(|k| empty.get(k).cloned()).unwrap_err();
        assert!(matches!(err, LaunchError::MissingEnv(NODE_PATH_VAR)));
    }

    #[test]
    fn env_source_rejects_empty_launcher_path() {
        let env = vars(&[(NODE_PATH_VAR, "/bin/echo"), (LAUNCHER_PATH_VAR, "")]);
        let err = EnvSource::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, LaunchError::MissingEnv(LAUNCHER_PATH_VAR)));
    }

    #[test]
    fn command_line_kind_needs_no_environment() {
        assert_eq!(SourceKind::CommandLine.load().unwrap(), ArgSource::CommandLine);
    }

    #[test]
    fn exit_policy_parsing() {
        let none: HashMap<String, OsString> = HashMap::new();
        assert_eq!(
            ExitPolicy::from_lookup(|k| none.get(k).cloned()).unwrap(),
            ExitPolicy::Collapse
        );
        for (raw, want) in [
            ("", ExitPolicy::Collapse),
            ("collapse", ExitPolicy::Collapse),
            ("Preserve", ExitPolicy::Preserve),
            (" preserve ", ExitPolicy::Preserve),
        ] {
            let env = vars(&[(EXIT_CODE_VAR, raw)]);
            assert_eq!(ExitPolicy::from_lookup(|k| env.get(k).cloned()).unwrap(), want);
        }
        let bad = vars(&[(EXIT_CODE_VAR, "sometimes")]);
        let err = ExitPolicy::from_lookup(|k| bad.get(k).cloned()).unwrap_err();
        assert!(err.is_config());
    }
}
