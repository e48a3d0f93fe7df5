//! Configuration module for jspackager
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (JSPACKAGER_*)
//! 3. `--config <path>`, or `jspackager.toml` in the working directory
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_overrides_from, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{CompilerSection, Config, RemoteSection, ResolveSection};
