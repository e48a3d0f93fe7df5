//! CompiledFile entity - a compiled bundle and its manifest
//!
//! CompiledFiles are the result of compiling one DependencySet. They
//! represent what will be written next to the set's owning source file.

use sha2::{Digest, Sha256};

use crate::domain::value_objects::join_path;

/// A compiled bundle ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFile {
    /// Directory the bundle and manifest are written to
    path: String,
    /// `<stem>.compiled.js`
    filename: String,
    /// `<stem>.js.manifest`
    manifest_filename: String,
    /// Concatenated (optionally minified) sources
    contents: String,
    /// Newline terminated package and stylesheet references
    manifest_contents: String,
}

impl CompiledFile {
    /// Create a new CompiledFile
    pub fn new(
        path: impl Into<String>,
        filename: impl Into<String>,
        manifest_filename: impl Into<String>,
        contents: impl Into<String>,
        manifest_contents: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            filename: filename.into(),
            manifest_filename: manifest_filename.into(),
            contents: contents.into(),
            manifest_contents: manifest_contents.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn manifest_filename(&self) -> &str {
        &self.manifest_filename
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn manifest_contents(&self) -> &str {
        &self.manifest_contents
    }

    /// Where the bundle lands
    pub fn compiled_path(&self) -> String {
        join_path(&self.path, &self.filename)
    }

    /// Where the manifest lands
    pub fn manifest_path(&self) -> String {
        join_path(&self.path, &self.manifest_filename)
    }

    /// SHA256 of the bundle contents
    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.contents.as_bytes());
        format!("sha256:{:x}", hasher.finalize())
    }

    /// Check if the bundle is empty
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
