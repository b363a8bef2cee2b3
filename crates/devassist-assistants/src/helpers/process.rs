//! Subprocess invocation

use crate::error::{Error, Result};
use camino::Utf8Path;
use tracing::debug;

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Exit code zero
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human-readable exit status
    pub fn status_display(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs external programs to completion
pub trait CommandRunner {
    /// Run `program` with `args`, optionally inside `cwd`, and wait for it.
    ///
    /// A non-zero exit is reported through [`CommandOutput`], not as an error.
    fn run(&self, program: &str, args: &[String], cwd: Option<&Utf8Path>) -> Result<CommandOutput>;
}

/// [`CommandRunner`] that spawns real processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: Option<&Utf8Path>) -> Result<CommandOutput> {
        which::which(program).map_err(|_| Error::command_not_found(program))?;

        match cwd {
            Some(dir) => debug!("Running in {}: {} {}", dir, program, args.join(" ")),
            None => debug!("Running: {} {}", program, args.join(" ")),
        }

        let mut expr = duct::cmd(program, args)
            .stdout_capture()
            .stderr_capture()
            .unchecked();
        if let Some(dir) = cwd {
            expr = expr.dir(dir.as_std_path());
        }

        let output = expr.run()?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
