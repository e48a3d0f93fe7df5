//! Script Loader Use Case
//!
//! Decides which files a page has to load for a set of entry scripts:
//! 1. Resolve each entry through compiled manifests, or through the source
//!    tree in development mode
//! 2. Point remote paths at their locally hosted mirror
//! 3. Merge the entries, keeping the first occurrence of every path
//! 4. Split the result into scripts and stylesheets

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::ports::FileHandler;
use crate::domain::services::{dedup_keep_first, DependencyTree, ManifestResolver, ParserOptions};
use crate::error::{ErrorKind, PackagerResult};

/// Options for resolving load lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Resolve through `.compiled.js` bundles and their manifests
    pub use_compiled_scripts: bool,
    /// Fall back to the source tree when a bundle is missing
    pub fallback_if_missing_compiled_script: bool,
    /// Browser-relative path replacing the remote symbol
    pub locally_hosted_path: String,
    pub parser: ParserOptions,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl LoadOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            use_compiled_scripts: config.resolve.use_compiled_scripts,
            fallback_if_missing_compiled_script: config.resolve.fallback_if_missing_compiled_script,
            locally_hosted_path: config.remote.locally_hosted_path.clone(),
            parser: config.parser_options(),
        }
    }

    pub fn with_compiled_scripts(mut self, use_compiled: bool) -> Self {
        self.use_compiled_scripts = use_compiled;
        self
    }

    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback_if_missing_compiled_script = fallback;
        self
    }
}

/// Ordered files to load, split by kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadPlan {
    pub scripts: Vec<String>,
    pub stylesheets: Vec<String>,
}

impl LoadPlan {
    fn from_paths(paths: Vec<String>) -> Self {
        let (stylesheets, scripts): (Vec<String>, Vec<String>) =
            paths.into_iter().partition(|p| p.ends_with(".css"));
        Self {
            scripts,
            stylesheets,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.stylesheets.is_empty()
    }
}

/// Script Loader Use Case
pub struct ScriptLoader<FS>
where
    FS: FileHandler,
{
    file_system: FS,
    options: LoadOptions,
}

impl<FS> ScriptLoader<FS>
where
    FS: FileHandler,
{
    pub fn new(file_system: FS, options: LoadOptions) -> Self {
        Self {
            file_system,
            options,
        }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Files to load for one entry script
    pub fn scripts_to_load(&self, source: &str) -> PackagerResult<LoadPlan> {
        self.scripts_to_load_all(&[source])
    }

    /// Files to load for several entry scripts, in the given order
    pub fn scripts_to_load_all(&self, sources: &[&str]) -> PackagerResult<LoadPlan> {
        let mut paths = Vec::new();
        for source in sources {
            paths.extend(self.load_order(source)?);
        }

        let remote = &self.options.parser.remote;
        let paths = paths
            .into_iter()
            .map(|path| remote.replace_symbol(&path, &self.options.locally_hosted_path));

        Ok(LoadPlan::from_paths(dedup_keep_first(paths)))
    }

    fn load_order(&self, source: &str) -> PackagerResult<Vec<String>> {
        if !self.options.use_compiled_scripts {
            return self.flatten_source(source);
        }

        let resolver = ManifestResolver::new(&self.file_system, self.options.parser.remote.clone());
        match resolver.resolve_file(source) {
            Ok(paths) => Ok(paths),
            Err(err)
                if err.kind() == ErrorKind::MissingFile
                    && self.options.fallback_if_missing_compiled_script =>
            {
                warn!(source, error = %err, "compiled script missing, loading sources");
                self.flatten_source(source)
            }
            Err(err) => Err(err),
        }
    }

    fn flatten_source(&self, source: &str) -> PackagerResult<Vec<String>> {
        debug!(source, "flattening source tree");
        DependencyTree::new(&self.file_system, source)
            .with_options(self.options.parser.clone())
            .flatten_dependency_tree(false)
    }
}
