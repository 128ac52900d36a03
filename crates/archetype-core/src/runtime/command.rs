//! External command specifications and execution
//!
//! Every child process is described by a [`CommandSpec`] and handed to a
//! [`CommandRunner`], which either captures its output (version probes) or
//! lets it write straight to the console (install and generate).

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Program name, ordered arguments and optional working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a `-D<name>=<value>` system property
    pub fn property(self, name: &str, value: impl fmt::Display) -> Self {
        self.arg(format!("-D{}={}", name, value))
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }
        command
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Output of a captured run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub success: bool,
    /// Standard output followed by standard error
    pub output: String,
}

/// Exit state of a streamed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub success: bool,
    /// `None` when the child was terminated by a signal
    pub code: Option<i32>,
}

/// Seam between the workflow and the operating system.
///
/// Both methods block until the child exits. There is no timeout.
pub trait CommandRunner {
    /// Run the command and collect its combined output
    fn capture(&self, spec: &CommandSpec) -> io::Result<Captured>;

    /// Run the command with inherited stdio
    fn stream(&self, spec: &CommandSpec) -> io::Result<CommandStatus>;
}

/// Runs commands with `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn capture(&self, spec: &CommandSpec) -> io::Result<Captured> {
        let output = spec.to_command().stdin(Stdio::null()).output()?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(Captured {
            success: output.status.success(),
            output: text,
        })
    }

    fn stream(&self, spec: &CommandSpec) -> io::Result<CommandStatus> {
        let status = spec
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(CommandStatus {
            success: status.success(),
            code: status.code(),
        })
    }
}
