//! Dependency tree
//!
//! Owns one parse of a root file and derives the two linearizations from
//! it: the flattened load order and the list of compilation units.
//! Building the tree and ordering it are separate passes.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use tracing::debug;

use crate::domain::entities::{DependencySet, File};
use crate::domain::ports::FileHandler;
use crate::domain::services::tree_parser::{DependencyTreeParser, ParserOptions};
use crate::domain::value_objects::{normalize_relative_path, RemoteConfig};
use crate::error::PackagerResult;

/// Keep the first occurrence of every path, preserving order
pub fn dedup_keep_first<I>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|path| seen.insert(path.clone()))
        .collect()
}

/// Lazily parsed dependency tree rooted at one source file
pub struct DependencyTree<'a> {
    handler: &'a dyn FileHandler,
    root_file: String,
    options: ParserOptions,
    tree: RefCell<Option<Rc<File>>>,
}

impl<'a> DependencyTree<'a> {
    pub fn new(handler: &'a dyn FileHandler, root_file: impl AsRef<str>) -> Self {
        Self {
            handler,
            root_file: normalize_relative_path(root_file.as_ref()),
            options: ParserOptions::default(),
            tree: RefCell::new(None),
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_tests_source_path(mut self, path: Option<String>) -> Self {
        self.options = self.options.with_tests_source_path(path);
        self
    }

    pub fn with_mute_missing_files(mut self, mute: bool) -> Self {
        self.options = self.options.with_mute_missing_files(mute);
        self
    }

    pub fn with_remote(mut self, remote: RemoteConfig) -> Self {
        self.options = self.options.with_remote(remote);
        self
    }

    pub fn root_file(&self) -> &str {
        &self.root_file
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse on first call, then hand out the cached root node
    pub fn get_tree(&self) -> PackagerResult<Rc<File>> {
        if let Some(tree) = self.tree.borrow().as_ref() {
            return Ok(Rc::clone(tree));
        }

        debug!(root = %self.root_file, "parsing dependency tree");
        let mut parser = DependencyTreeParser::new(self.handler, self.options.clone());
        let tree = parser.parse_file(&self.root_file)?;
        *self.tree.borrow_mut() = Some(Rc::clone(&tree));
        Ok(tree)
    }

    /// Linearize the tree into load order.
    ///
    /// Children come before their parent, stylesheets just before their
    /// owning script, and every path appears once. With
    /// `respect_package_boundaries` a `@root` child stands in for its whole
    /// package: its scripts are left to the bundle, while the stylesheets and
    /// nested packages the bundle does not contain are listed ahead of it.
    pub fn flatten_dependency_tree(
        &self,
        respect_package_boundaries: bool,
    ) -> PackagerResult<Vec<String>> {
        let tree = self.get_tree()?;
        let mut listing = Vec::new();
        list_children_first(&tree, respect_package_boundaries, &mut listing);
        Ok(dedup_keep_first(listing))
    }

    /// Split the tree into compilation units, packages before their users
    /// and the root file's unit last
    pub fn get_dependency_sets(&self) -> PackagerResult<Vec<DependencySet>> {
        let tree = self.get_tree()?;
        let mut seen = HashSet::new();
        let mut sets = Vec::new();
        collect_sets(&tree, &mut seen, &mut sets);
        Ok(sets)
    }
}

fn list_children_first(file: &File, respect_package_boundaries: bool, listing: &mut Vec<String>) {
    for child in file.scripts() {
        if respect_package_boundaries && child.is_root() {
            list_package_placeholder(child, listing);
        } else {
            list_children_first(child, respect_package_boundaries, listing);
        }
    }
    listing.extend(file.stylesheets().iter().cloned());
    listing.push(file.full_path().to_string());
}

fn list_package_placeholder(package: &File, listing: &mut Vec<String>) {
    let mut unit = DependencySet::new();
    let mut nested = Vec::new();
    walk_unit(package, &mut unit, &mut nested);

    listing.extend(unit.stylesheets);
    listing.extend(unit.packages);
    listing.push(package.full_path().to_string());
}

fn collect_sets(owner: &Rc<File>, seen: &mut HashSet<String>, sets: &mut Vec<DependencySet>) {
    if !seen.insert(owner.full_path().to_string()) {
        return;
    }

    let mut set = DependencySet::new();
    let mut nested = Vec::new();
    walk_unit(owner, &mut set, &mut nested);

    for package in &nested {
        collect_sets(package, seen, sets);
    }
    sets.push(set);
}

/// Gather one unit's scripts, stopping at package roots
fn walk_unit(file: &File, set: &mut DependencySet, nested: &mut Vec<Rc<File>>) {
    for child in file.scripts() {
        if child.is_root() {
            let path = child.full_path().to_string();
            if !set.packages.contains(&path) {
                set.packages.push(path);
                nested.push(Rc::clone(child));
            }
        } else {
            walk_unit(child, set, nested);
        }
    }

    for stylesheet in file.stylesheets() {
        if !set.stylesheets.contains(stylesheet) {
            set.stylesheets.push(stylesheet.clone());
        }
    }

    let path = file.full_path().to_string();
    if !set.dependencies.contains(&path) {
        set.dependencies.push(path);
    }
}
