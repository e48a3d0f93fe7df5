//! File entity - one node of the dependency graph
//!
//! Nodes are built by the tree parser and shared afterwards through `Rc`,
//! so a script required from several places is represented by one node.

use std::rc::Rc;

use crate::domain::entities::OrderEntry;
use crate::domain::value_objects::{split_path, FileType};

/// A JS or CSS source file and its direct relationships
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    full_path: String,
    /// Directory part of `full_path`
    path: String,
    /// File name without its last extension
    filename: String,
    filetype: FileType,
    is_root: bool,
    is_remote: bool,
    /// Kept in the tree although the file does not exist (mute mode)
    is_missing: bool,
    scripts: Vec<Rc<File>>,
    stylesheets: Vec<String>,
    packages: Vec<String>,
    annotation_order_map: Vec<OrderEntry>,
}

impl File {
    /// Create a leaf node for `full_path` with no relationships yet
    pub fn new(full_path: impl Into<String>) -> Self {
        let full_path = full_path.into();
        let (dir, basename) = split_path(&full_path);
        let filename = match basename.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem.to_string(),
            _ => basename.to_string(),
        };

        Self {
            path: dir.to_string(),
            filename,
            filetype: FileType::from_path(basename),
            is_root: false,
            is_remote: false,
            is_missing: false,
            scripts: Vec::new(),
            stylesheets: Vec::new(),
            packages: Vec::new(),
            annotation_order_map: Vec::new(),
            full_path,
        }
    }

    /// An externally hosted file, never scanned
    pub fn remote(full_path: impl Into<String>) -> Self {
        let mut file = Self::new(full_path);
        file.is_remote = true;
        file
    }

    /// A dangling reference retained in mute mode
    pub fn missing(full_path: impl Into<String>) -> Self {
        let mut file = Self::new(full_path);
        file.is_missing = true;
        file
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn filetype(&self) -> FileType {
        self.filetype
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    pub fn is_remote(&self) -> bool {
        self.is_remote
    }

    pub fn is_missing(&self) -> bool {
        self.is_missing
    }

    pub fn scripts(&self) -> &[Rc<File>] {
        &self.scripts
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn annotation_order_map(&self) -> &[OrderEntry] {
        &self.annotation_order_map
    }

    /// Mark as package root
    pub(crate) fn set_root(&mut self, is_root: bool) {
        self.is_root = is_root;
    }

    pub(crate) fn set_annotation_order_map(&mut self, order: Vec<OrderEntry>) {
        self.annotation_order_map = order;
    }

    /// Add a script child unless this file already lists the same path
    pub(crate) fn push_script(&mut self, script: Rc<File>) -> bool {
        if self
            .scripts
            .iter()
            .any(|existing| existing.full_path == script.full_path)
        {
            return false;
        }
        self.scripts.push(script);
        true
    }

    pub(crate) fn push_stylesheet(&mut self, stylesheet: String) {
        if !self.stylesheets.contains(&stylesheet) {
            self.stylesheets.push(stylesheet);
        }
    }

    pub(crate) fn push_package(&mut self, package: String) {
        if !self.packages.contains(&package) {
            self.packages.push(package);
        }
    }
}
