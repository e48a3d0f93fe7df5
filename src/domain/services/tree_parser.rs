//! Dependency tree parser
//!
//! Builds a [`File`] tree from a root source file by following its
//! annotations recursively.
//!
//! - Cycles are detected with the stack of ancestors currently being parsed,
//!   so diamonds are fine and only true cycles fail.
//! - Each path is parsed once per parser. Later references share the first
//!   node (`Rc`), including its root flag.
//! - In mute mode a missing dependency becomes a dangling leaf instead of an
//!   error. A missing root file and cycles are never muted.

use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::domain::entities::{AnnotationKind, AnnotationSet, File};
use crate::domain::ports::FileHandler;
use crate::domain::services::annotation_parser::scan_annotations;
use crate::domain::value_objects::{normalize_relative_path, resolve_reference, RemoteConfig};
use crate::error::{PackagerError, PackagerResult};

/// Knobs shared by the parser and the dependency tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Keep missing dependencies as dangling leaves
    pub mute_missing_files: bool,
    /// Base directory for `@tests` entries
    pub tests_source_path: Option<String>,
    pub remote: RemoteConfig,
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mute_missing_files(mut self, mute: bool) -> Self {
        self.mute_missing_files = mute;
        self
    }

    pub fn with_tests_source_path(mut self, path: Option<String>) -> Self {
        self.tests_source_path = path.map(|p| p.trim_end_matches('/').to_string());
        self
    }

    pub fn with_remote(mut self, remote: RemoteConfig) -> Self {
        self.remote = remote;
        self
    }
}

/// Recursive annotation-driven tree builder
pub struct DependencyTreeParser<'a> {
    handler: &'a dyn FileHandler,
    options: ParserOptions,
    parsed: HashMap<String, Rc<File>>,
}

impl<'a> DependencyTreeParser<'a> {
    pub fn new(handler: &'a dyn FileHandler, options: ParserOptions) -> Self {
        Self {
            handler,
            options,
            parsed: HashMap::new(),
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse `path` and everything it references.
    ///
    /// # Errors
    ///
    /// - `MissingFile` when `path` itself is not a file
    /// - `Parsing` when a referenced script is missing (unless muted)
    /// - `MissingFile` when a referenced stylesheet is missing (unless muted)
    /// - `Recursion` when the references form a cycle
    pub fn parse_file(&mut self, path: &str) -> PackagerResult<Rc<File>> {
        let path = normalize_relative_path(path);
        let mut ancestors = Vec::new();
        self.parse_node(&path, None, &mut ancestors)
    }

    fn parse_node(
        &mut self,
        path: &str,
        parent: Option<&str>,
        ancestors: &mut Vec<String>,
    ) -> PackagerResult<Rc<File>> {
        if ancestors.iter().any(|ancestor| ancestor == path) {
            let mut chain = ancestors.clone();
            chain.push(path.to_string());
            return Err(PackagerError::Recursion {
                path: path.to_string(),
                chain,
            });
        }

        if let Some(existing) = self.parsed.get(path) {
            debug!(path, "reusing parsed file");
            return Ok(Rc::clone(existing));
        }

        if !self.handler.is_file(Path::new(path)) {
            return match parent {
                None => Err(PackagerError::MissingFile {
                    path: path.to_string(),
                }),
                Some(parent) if self.options.mute_missing_files => {
                    warn!(path, parent, "keeping missing dependency");
                    Ok(Rc::new(File::missing(path)))
                }
                Some(parent) => Err(PackagerError::missing_reference(path, parent)),
            };
        }

        let mut file = File::new(path);
        if file.filetype().is_stylesheet() {
            return Ok(self.remember(file));
        }

        debug!(path, "scanning annotations");
        let annotations = scan_annotations(self.handler, path)?;
        file.set_root(annotations.root);

        ancestors.push(path.to_string());
        let attached = self.attach_dependencies(&mut file, &annotations, ancestors);
        ancestors.pop();
        attached?;

        file.set_annotation_order_map(annotations.ordering);
        Ok(self.remember(file))
    }

    /// Walk the ordering map so mixed directive kinds keep their written order
    fn attach_dependencies(
        &mut self,
        file: &mut File,
        annotations: &AnnotationSet,
        ancestors: &mut Vec<String>,
    ) -> PackagerResult<()> {
        let dir = file.path().to_string();

        for entry in &annotations.ordering {
            let Some(argument) = annotations.argument(entry) else {
                continue;
            };

            match entry.action {
                AnnotationKind::Require => {
                    let child = resolve_reference(&dir, argument);
                    self.attach_script(file, &child, ancestors)?;
                }
                AnnotationKind::Tests => {
                    let base = self.options.tests_source_path.as_deref().unwrap_or(&dir);
                    let child = resolve_reference(base, argument);
                    self.attach_script(file, &child, ancestors)?;
                }
                AnnotationKind::RequireRemote => self.attach_remote(file, argument)?,
                AnnotationKind::RequireStyle => {
                    let stylesheet = resolve_reference(&dir, argument);
                    self.attach_stylesheet(file, stylesheet)?;
                }
                AnnotationKind::Root => {}
            }
        }

        Ok(())
    }

    fn attach_script(
        &mut self,
        file: &mut File,
        child_path: &str,
        ancestors: &mut Vec<String>,
    ) -> PackagerResult<()> {
        let child = self.parse_node(child_path, Some(file.full_path()), ancestors)?;
        if child.is_root() {
            file.push_package(child.full_path().to_string());
        }
        file.push_script(child);
        Ok(())
    }

    /// Remote entries are opaque leaves; they are only checked for existence
    /// when a local mirror folder is configured
    fn attach_remote(&mut self, file: &mut File, argument: &str) -> PackagerResult<()> {
        let remote_path = self.options.remote.prefix(argument);

        if let Some(local) = self.options.remote.local_path(&remote_path) {
            if !self.handler.is_file(Path::new(&local)) {
                if !self.options.mute_missing_files {
                    return Err(PackagerError::missing_reference(&local, file.full_path()));
                }
                warn!(path = %local, parent = file.full_path(), "keeping missing remote dependency");
            }
        }

        file.push_script(Rc::new(File::remote(remote_path)));
        Ok(())
    }

    fn attach_stylesheet(&mut self, file: &mut File, stylesheet: String) -> PackagerResult<()> {
        if !self.handler.is_file(Path::new(&stylesheet)) {
            if !self.options.mute_missing_files {
                return Err(PackagerError::MissingFile { path: stylesheet });
            }
            warn!(path = %stylesheet, parent = file.full_path(), "keeping missing stylesheet");
        }
        file.push_stylesheet(stylesheet);
        Ok(())
    }

    fn remember(&mut self, file: File) -> Rc<File> {
        let file = Rc::new(file);
        self.parsed
            .insert(file.full_path().to_string(), Rc::clone(&file));
        file
    }
}
