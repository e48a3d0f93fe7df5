//! Remote symbol handling
//!
//! `@requireRemote common.js` is recorded as `@remote/common.js`. The symbol
//! marks the path as hosted elsewhere; when a server-side mirror folder is
//! known the same path can be mapped onto it for existence checks and
//! compilation.

use super::path::{join_path, normalize_relative_path};

/// Default reserved token for externally hosted paths
pub const DEFAULT_REMOTE_SYMBOL: &str = "@remote";

/// Remote symbol plus the optional local mirror of remote files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    symbol: String,
    shared_folder: Option<String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_REMOTE_SYMBOL.to_string(),
            shared_folder: None,
        }
    }
}

impl RemoteConfig {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            shared_folder: None,
        }
    }

    pub fn with_shared_folder(mut self, folder: Option<String>) -> Self {
        self.shared_folder = folder.filter(|f| !f.is_empty());
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn shared_folder(&self) -> Option<&str> {
        self.shared_folder.as_deref()
    }

    /// `common.js` -> `@remote/common.js`
    pub fn prefix(&self, path: &str) -> String {
        join_path(&self.symbol, path.trim_start_matches('/'))
    }

    pub fn is_remote(&self, path: &str) -> bool {
        !self.symbol.is_empty() && path.contains(&self.symbol)
    }

    /// Replace the symbol and everything before it with `replacement`.
    ///
    /// `site/js/@remote/lib.js` with `shared` gives `shared/lib.js`. Paths
    /// without the symbol are returned unchanged.
    pub fn replace_symbol(&self, path: &str, replacement: &str) -> String {
        if self.symbol.is_empty() {
            return path.to_string();
        }
        match path.find(&self.symbol) {
            Some(idx) => {
                let rest = &path[idx + self.symbol.len()..];
                format!("{}{}", replacement, rest)
            }
            None => path.to_string(),
        }
    }

    /// Server-side location of a remote path, when a mirror folder is set
    pub fn local_path(&self, path: &str) -> Option<String> {
        let folder = self.shared_folder.as_deref()?;
        if !self.is_remote(path) {
            return None;
        }
        Some(normalize_relative_path(
            &self.replace_symbol(path, folder.trim_end_matches('/')),
        ))
    }
}
