//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod file_type;
pub mod path;
mod remote;

pub use file_type::FileType;
pub use path::{join_path, normalize_relative_path, relative_to, resolve_reference, split_path};
pub use remote::{RemoteConfig, DEFAULT_REMOTE_SYMBOL};
