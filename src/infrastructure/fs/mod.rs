//! File System Implementations
//!
//! Concrete implementations of the FileHandler port.

mod local;

pub use local::LocalFs;
