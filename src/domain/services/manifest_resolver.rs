//! Manifest resolver
//!
//! Production mode without recompiling: starting from a compiled bundle,
//! follow the `.js.manifest` sidecars to find every bundle and stylesheet
//! that must load before it.

use std::path::Path;

use tracing::debug;

use crate::domain::ports::FileHandler;
use crate::domain::services::compiler::{compiled_filename, manifest_filename, source_filename_for_compiled};
use crate::domain::services::dependency_tree::dedup_keep_first;
use crate::domain::value_objects::{
    normalize_relative_path, resolve_reference, split_path, FileType, RemoteConfig,
};
use crate::error::{PackagerError, PackagerResult};

const COMPILED_SUFFIX: &str = ".compiled.js";

pub struct ManifestResolver<'a> {
    handler: &'a dyn FileHandler,
    remote: RemoteConfig,
}

impl<'a> ManifestResolver<'a> {
    pub fn new(handler: &'a dyn FileHandler, remote: RemoteConfig) -> Self {
        Self { handler, remote }
    }

    pub fn remote(&self) -> &RemoteConfig {
        &self.remote
    }

    /// Ordered load list for a source file or its compiled bundle.
    ///
    /// Prerequisites come first and the bundle itself last. A missing
    /// manifest means the bundle has no prerequisites.
    /// Stylesheets and remote paths have no bundle and come back unchanged.
    ///
    /// # Errors
    ///
    /// - `MissingFile` when a compiled bundle in the chain does not exist
    /// - `Parsing` for an input path or manifest line that is neither `.js`
    ///   nor `.css`
    /// - `Recursion` when manifests reference each other in a loop
    pub fn resolve_file(&self, path: &str) -> PackagerResult<Vec<String>> {
        let path = normalize_relative_path(path);
        if self.remote.is_remote(&path) || FileType::from_path(&path).is_stylesheet() {
            return Ok(vec![path]);
        }
        if !path.ends_with(".js") {
            return Err(PackagerError::unresolvable_path(&path));
        }

        let compiled = if path.ends_with(COMPILED_SUFFIX) {
            path
        } else {
            compiled_filename(&path)
        };

        let mut chain = Vec::new();
        let mut resolved = Vec::new();
        self.resolve_compiled(&compiled, &mut chain, &mut resolved)?;
        Ok(dedup_keep_first(resolved))
    }

    /// Swap the remote symbol, and anything before it, for a browser path
    pub fn replace_remote_symbol_if_present(&self, path: &str, browser_relative_path: &str) -> String {
        self.remote.replace_symbol(path, browser_relative_path)
    }

    fn resolve_compiled(
        &self,
        compiled: &str,
        chain: &mut Vec<String>,
        resolved: &mut Vec<String>,
    ) -> PackagerResult<()> {
        if chain.iter().any(|entry| entry == compiled) {
            let mut chain = chain.clone();
            chain.push(compiled.to_string());
            return Err(PackagerError::Recursion {
                path: compiled.to_string(),
                chain,
            });
        }

        if !self.handler.is_file(Path::new(compiled)) {
            return Err(PackagerError::MissingFile {
                path: compiled.to_string(),
            });
        }

        let manifest = manifest_filename(&source_filename_for_compiled(compiled));
        let entries = self.read_manifest(&manifest)?;
        let (dir, _) = split_path(compiled);

        chain.push(compiled.to_string());
        for entry in &entries {
            self.resolve_entry(dir, entry, chain, resolved)?;
        }
        chain.pop();

        resolved.push(compiled.to_string());
        Ok(())
    }

    fn resolve_entry(
        &self,
        dir: &str,
        entry: &str,
        chain: &mut Vec<String>,
        resolved: &mut Vec<String>,
    ) -> PackagerResult<()> {
        if self.remote.is_remote(entry) {
            resolved.push(resolve_reference(dir, entry));
            return Ok(());
        }

        if entry.ends_with(".css") {
            resolved.push(resolve_reference(dir, entry));
            Ok(())
        } else if entry.ends_with(".js") {
            let target = resolve_reference(dir, entry);
            let compiled = if target.ends_with(COMPILED_SUFFIX) {
                target
            } else {
                compiled_filename(&target)
            };
            self.resolve_compiled(&compiled, chain, resolved)
        } else {
            Err(PackagerError::malformed_manifest_entry(entry))
        }
    }

    /// Non-blank manifest lines; the handle is released before recursing
    fn read_manifest(&self, manifest: &str) -> PackagerResult<Vec<String>> {
        if !self.handler.is_file(Path::new(manifest)) {
            debug!(manifest, "no manifest, treating as empty");
            return Ok(Vec::new());
        }

        debug!(manifest, "reading manifest");
        let mut reader = self.handler.open_for_read(Path::new(manifest))?;
        let mut entries = Vec::new();
        while let Some(line) = reader.read_line()? {
            let line = line.trim();
            if !line.is_empty() {
                entries.push(line.to_string());
            }
        }
        Ok(entries)
    }
}
