//! FileHandler port - abstraction over file I/O operations
//!
//! The resolver only ever needs existence checks, line-by-line reads,
//! whole-file reads for concatenation and a directory listing. Keeping
//! these behind a trait lets the domain layer run against an in-memory
//! tree in tests.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Attach the path that triggered an `std::io::Error`
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::from_io(err, Path::new(""))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// An open read handle.
///
/// The handle is closed when it is dropped, so every exit path out of a
/// scanning loop (end of file, early return, read error) releases it.
pub trait LineReader {
    /// Next line without its terminator, or `None` at end of file
    fn read_line(&mut self) -> FsResult<Option<String>>;
}

/// Abstract file handler interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockFileHandler` - in-memory for testing
pub trait FileHandler {
    /// True when `path` names an existing regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Open a file for line-by-line reading
    fn open_for_read(&self, path: &Path) -> FsResult<Box<dyn LineReader + '_>>;

    /// Read a whole file as string
    fn read_to_string(&self, path: &Path) -> FsResult<String>;

    /// List the entries directly under a directory.
    ///
    /// Returns `(path, is_dir)` pairs in a stable, sorted order.
    fn list_dir(&self, path: &Path) -> FsResult<Vec<(PathBuf, bool)>>;

    /// Write content to file, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;
}
