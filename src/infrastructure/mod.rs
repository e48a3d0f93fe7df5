//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - local disk FileHandler
//! - `process/` - external compiler invocation

pub mod fs;
pub mod process;

// Re-export for convenience
pub use fs::LocalFs;
pub use process::ClosureCompilerProcess;
