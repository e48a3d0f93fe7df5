//! Common test utilities for jspackager scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus CLI execution helpers
//! - Fixtures: reusable source trees

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
