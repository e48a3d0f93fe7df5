//! Subcommand handlers
//!
//! Each handler receives the resolved configuration and writes either plain
//! text or NDJSON events to stdout.

pub mod clean;
pub mod compile;
pub mod flatten;
pub mod resolve;
pub mod sets;
