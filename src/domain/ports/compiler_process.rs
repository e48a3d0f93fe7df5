//! CompilerProcess port - the external minifier seam
//!
//! The core only builds the argument list; running a binary and turning its
//! exit status into an error is left to the infrastructure layer.

/// Captured result of a finished compiler run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub exit_code: Option<i32>,
}

/// Errors raised at the process boundary
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{command}' exited with {exit_code:?}: {stderr}")]
    Failed {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },
}

/// Blocking invocation of an external JS compiler
pub trait CompilerProcess {
    /// Human readable name, used in logs
    fn name(&self) -> &str;

    /// Run the compiler with the generated argument list
    fn invoke(&self, args: &[String]) -> Result<ProcessOutput, ProcessError>;
}
