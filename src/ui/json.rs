//! NDJSON output for `--json` mode.
//!
//! Every command writes one `start` event, any number of item events and
//! one `complete` event, each on its own line.

use std::io::{self, Write};

use serde::Serialize;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event carrying the command's result.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    pub data: T,
}

impl<'a, T: Serialize> CompleteEvent<'a, T> {
    pub fn new(command: &'a str, data: T) -> Self {
        Self {
            event: "complete",
            command,
            data,
        }
    }
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}

/// Write a typed event to a custom writer.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}
