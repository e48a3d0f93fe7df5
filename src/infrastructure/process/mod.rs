//! External Compiler Processes
//!
//! Concrete implementations of the CompilerProcess port.

mod closure;

pub use closure::ClosureCompilerProcess;
