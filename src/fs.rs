//! File handler implementations
//!
//! - `LocalFs` (re-exported from the infrastructure layer) for disk access
//! - `MockFileHandler` for in-memory trees in unit tests

pub use crate::infrastructure::fs::LocalFs;

#[cfg(test)]
pub use mock::MockFileHandler;
