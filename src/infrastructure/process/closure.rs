//! Closure Compiler Process
//!
//! Runs the Closure Compiler (or anything accepting the same flags) as a
//! blocking child process and captures its output.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{CompilerProcess, ProcessError, ProcessOutput};

/// `<command> <base_args...> <generated args...>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureCompilerProcess {
    command: String,
    base_args: Vec<String>,
}

impl ClosureCompilerProcess {
    pub fn new(command: impl Into<String>, base_args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            base_args,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn base_args(&self) -> &[String] {
        &self.base_args
    }

    /// Check if the command can be started at all
    pub fn check_available(&self) -> bool {
        Command::new(&self.command)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl CompilerProcess for ClosureCompilerProcess {
    fn name(&self) -> &str {
        &self.command
    }

    fn invoke(&self, args: &[String]) -> Result<ProcessOutput, ProcessError> {
        debug!(command = %self.command, inputs = args.len(), "spawning compiler");

        let output = Command::new(&self.command)
            .args(&self.base_args)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ProcessError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(ProcessError::Failed {
                command: self.command.clone(),
                exit_code: output.status.code(),
                stderr,
            });
        }

        Ok(ProcessOutput {
            stdout,
            stderr,
            success: true,
            exit_code: output.status.code(),
        })
    }
}
