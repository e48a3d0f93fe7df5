//! Error types for jspackager
//!
//! Uses `thiserror` for library errors. The three resolution failures
//! (missing file, parsing, recursion) are distinct variants so callers can
//! branch on them and pull out the carried path or line.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::compiler_process::ProcessError;
use crate::domain::ports::file_system::FsError;

/// Result type alias for jspackager operations
pub type PackagerResult<T> = Result<T, PackagerError>;

/// Closed classification of [`PackagerError`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingFile,
    Parsing,
    Recursion,
    Io,
    Config,
    CompilerProcess,
}

/// Main error type for jspackager operations
#[derive(Error, Debug)]
pub enum PackagerError {
    /// A referenced or expected file does not exist
    #[error("missing file: {path}")]
    MissingFile { path: String },

    /// A referenced dependency vanished during descent, or a manifest line is malformed
    #[error("{message}")]
    Parsing { message: String, errors: String },

    /// The file being parsed is already one of its own ancestors
    #[error("recursive dependency detected on \"{path}\" (chain: {})", chain.join(" -> "))]
    Recursion { path: String, chain: Vec<String> },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// External compiler process failed or could not be started
    #[error("compiler process failed: {message}")]
    CompilerProcess { message: String },
}

impl PackagerError {
    /// Build the error raised when a required file is missing during descent
    pub fn missing_reference(missing: &str, parent: &str) -> Self {
        PackagerError::Parsing {
            message: format!(
                "Failed to include missing file \"{}\" while trying to parse \"{}\"",
                missing, parent
            ),
            errors: missing.to_string(),
        }
    }

    /// Build the error raised for a manifest line that is neither `.js` nor `.css`
    pub fn malformed_manifest_entry(line: &str) -> Self {
        PackagerError::Parsing {
            message: "Malformed manifest entry encountered".to_string(),
            errors: line.to_string(),
        }
    }

    pub fn unresolvable_path(path: &str) -> Self {
        PackagerError::Parsing {
            message: "Only scripts and stylesheets can be resolved".to_string(),
            errors: path.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PackagerError::MissingFile { .. } => ErrorKind::MissingFile,
            PackagerError::Parsing { .. } => ErrorKind::Parsing,
            PackagerError::Recursion { .. } => ErrorKind::Recursion,
            PackagerError::Io(_) => ErrorKind::Io,
            PackagerError::Config { .. } => ErrorKind::Config,
            PackagerError::CompilerProcess { .. } => ErrorKind::CompilerProcess,
        }
    }

    /// Path carried by a `MissingFile` error
    pub fn missing_path(&self) -> Option<&str> {
        match self {
            PackagerError::MissingFile { path } => Some(path),
            _ => None,
        }
    }

    /// Referenced path or manifest line carried by a `Parsing` error
    pub fn offending_entry(&self) -> Option<&str> {
        match self {
            PackagerError::Parsing { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Path that closed the cycle for a `Recursion` error
    pub fn recursion_path(&self) -> Option<&str> {
        match self {
            PackagerError::Recursion { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl From<FsError> for PackagerError {
    fn from(err: FsError) -> Self {
        match err {
            FsError::NotFound(path) => PackagerError::MissingFile {
                path: path.display().to_string(),
            },
            FsError::Io(io) => PackagerError::Io(io),
            other => PackagerError::Io(std::io::Error::other(other.to_string())),
        }
    }
}

impl From<ProcessError> for PackagerError {
    fn from(err: ProcessError) -> Self {
        PackagerError::CompilerProcess {
            message: err.to_string(),
        }
    }
}
