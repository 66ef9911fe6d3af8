use std::ffi::OsString;
use std::process::{Command, Stdio};

use crate::config::{ArgSource, CLI_BIN_NAME};
use crate::error::LaunchError;

/// Executable plus ordered arguments for a single child process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    program: OsString,
    args: Vec<OsString>,
}

impl Invocation {
    /// Resolve from `source` and the program arguments after argv[0].
    ///
    /// Arguments are forwarded untouched and in order.
    pub fn resolve<I>(source: &ArgSource, argv: I) -> Result<Self, LaunchError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut argv = argv.into_iter();
        match source {
            ArgSource::Environment(env) => {
                let mut args = vec![env.launcher_path().clone()];
                args.extend(argv);
                Ok(Self {
                    program: env.node_path().clone().into_os_string(),
                    args,
                })
            }
            ArgSource::CommandLine => {
                let program = argv
                    .next()
                    .filter(|p| !p.is_empty())
                    .ok_or(LaunchError::MissingProgram(CLI_BIN_NAME))?;
                Ok(Self {
                    program,
                    args: argv.collect(),
                })
            }
        }
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Child command: stdout/stderr inherited, stdin not connected.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}
