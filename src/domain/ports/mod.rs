//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod compiler_process;
pub mod file_system;

pub use compiler_process::{CompilerProcess, ProcessError, ProcessOutput};
pub use file_system::{FileHandler, FsError, FsResult, LineReader};
