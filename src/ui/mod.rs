//! Terminal and NDJSON rendering for the CLI

pub mod json;
pub mod output;
