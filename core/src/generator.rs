use std::{
    env, fmt,
    fs::File,
    path::{Component, Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
};

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::map::MapParams;

/// how a single generator invocation ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum InvocationOutcome {
    Success,
    ExitCode(i32),
    /// terminated by a signal (unix only)
    Signal(i32),
    SpawnFailed(String),
}

impl InvocationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, InvocationOutcome::Success)
    }

    pub fn from_status(status: ExitStatus) -> InvocationOutcome {
        if status.success() {
            return InvocationOutcome::Success;
        }

        if let Some(code) = status.code() {
            return InvocationOutcome::ExitCode(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return InvocationOutcome::Signal(signal);
            }
        }

        InvocationOutcome::ExitCode(-1)
    }
}

impl fmt::Display for InvocationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvocationOutcome::Success => write!(f, "success"),
            InvocationOutcome::ExitCode(code) => {
                write!(f, "The generator terminated with a non-zero exitcode: {}", code)
            }
            InvocationOutcome::Signal(signal) => {
                write!(f, "The generator was terminated by signal {}", signal)
            }
            InvocationOutcome::SpawnFailed(reason) => {
                write!(f, "The generator could not be started: {}", reason)
            }
        }
    }
}

/// anything that can turn map parameters into map bytes written to `output`
pub trait MapGenerator {
    /// whether the generator can be expected to run at all
    fn is_available(&self) -> bool;

    /// produce one map, blocking until done
    fn generate(&mut self, params: &MapParams, output: File) -> InvocationOutcome;
}

/// runs an external executable as `program [args...] N K seed > output`
#[derive(Debug, Clone)]
pub struct ExternalGenerator {
    program: PathBuf,
    leading_args: Vec<String>,
}

impl ExternalGenerator {
    pub fn new<P: Into<PathBuf>>(program: P, leading_args: Vec<String>) -> ExternalGenerator {
        ExternalGenerator {
            program: program.into(),
            leading_args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// where the program would be launched from, following `PATH` for bare names
    pub fn resolve(&self) -> Option<PathBuf> {
        let mut components = self.program.components();
        let is_bare_name = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );

        if !is_bare_name {
            return self.program.exists().then(|| self.program.clone());
        }

        let search_path = env::var_os("PATH")?;
        env::split_paths(&search_path)
            .map(|dir| dir.join(&self.program))
            .find(|candidate| candidate.is_file())
    }

    fn command(&self, params: &MapParams) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.leading_args).args(params.args());
        command
    }
}

impl MapGenerator for ExternalGenerator {
    fn is_available(&self) -> bool {
        self.resolve().is_some()
    }

    fn generate(&mut self, params: &MapParams, output: File) -> InvocationOutcome {
        let args = params.args();
        debug!(
            "running {} {}",
            self.program.display(),
            self.leading_args.iter().chain(args.iter()).join(" ")
        );

        let status = self
            .command(params)
            .stdin(Stdio::null())
            .stdout(Stdio::from(output))
            .stderr(Stdio::inherit())
            .status();

        match status {
            Ok(status) => InvocationOutcome::from_status(status),
            Err(err) => InvocationOutcome::SpawnFailed(err.to_string()),
        }
    }
}
