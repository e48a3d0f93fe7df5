//! Build Use Case
//!
//! Orchestrates compilation of a single entry file or a whole folder:
//! 1. Parse the dependency tree(s)
//! 2. Compile every dependency set
//! 3. Write bundles and manifests unless this is a dry run
//!
//! Also removes previously written artifacts.

use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::domain::entities::{CompiledFile, DependencySet};
use crate::domain::ports::{CompilerProcess, FileHandler};
use crate::domain::services::{Compiler, CompilerOptions, DependencyTree, ParserOptions};
use crate::error::PackagerResult;

/// Options for the build operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Compile without writing anything
    pub dry_run: bool,
    pub parser: ParserOptions,
    pub compiler: CompilerOptions,
}

impl BuildOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            dry_run: false,
            parser: config.parser_options(),
            compiler: config.compiler_options(),
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_mute_missing_files(mut self, mute: bool) -> Self {
        self.parser = self.parser.with_mute_missing_files(mute);
        self
    }
}

/// One written (or would-be written) bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSummary {
    pub compiled_path: String,
    pub manifest_path: String,
    pub hash: String,
    pub bytes: usize,
    pub manifest_entries: usize,
}

impl From<&CompiledFile> for ArtifactSummary {
    fn from(file: &CompiledFile) -> Self {
        Self {
            compiled_path: file.compiled_path(),
            manifest_path: file.manifest_path(),
            hash: file.content_hash(),
            bytes: file.contents().len(),
            manifest_entries: file.manifest_contents().lines().count(),
        }
    }
}

/// Result of the build operation
#[derive(Debug, Clone, Default)]
pub struct BuildResult {
    pub compiled: Vec<CompiledFile>,
    pub written: bool,
}

impl BuildResult {
    pub fn summaries(&self) -> Vec<ArtifactSummary> {
        self.compiled.iter().map(ArtifactSummary::from).collect()
    }
}

/// Build Use Case
pub struct BuildUseCase<FS>
where
    FS: FileHandler,
{
    file_system: FS,
    process: Option<Box<dyn CompilerProcess>>,
}

impl<FS> BuildUseCase<FS>
where
    FS: FileHandler,
{
    pub fn new(file_system: FS) -> Self {
        Self {
            file_system,
            process: None,
        }
    }

    /// Minify through an external compiler
    pub fn with_process(mut self, process: Option<Box<dyn CompilerProcess>>) -> Self {
        self.process = process;
        self
    }

    /// Dependency sets of one entry file, packages first
    pub fn dependency_sets(
        &self,
        source: &str,
        options: &BuildOptions,
    ) -> PackagerResult<Vec<DependencySet>> {
        DependencyTree::new(&self.file_system, source)
            .with_options(options.parser.clone())
            .get_dependency_sets()
    }

    /// Compile a file, or every source file when `target` is a folder
    pub fn execute(&self, target: &str, options: &BuildOptions) -> PackagerResult<BuildResult> {
        let compiler = self.compiler(options);
        let is_file = self.file_system.is_file(Path::new(target));

        let compiled = match (is_file, options.dry_run) {
            (true, true) => compiler.compile_tree(&self.tree(target, options))?,
            (true, false) => compiler.compile_and_write(&self.tree(target, options))?,
            (false, true) => compiler.compile_folder_units(target, &options.parser)?,
            (false, false) => compiler.compile_folder(target, &options.parser)?,
        };

        Ok(BuildResult {
            compiled,
            written: !options.dry_run,
        })
    }

    /// Remove compiled bundles and manifests under `folder`
    pub fn clean(&self, folder: &str) -> PackagerResult<Vec<String>> {
        Compiler::new(&self.file_system, CompilerOptions::default()).clear_packages(folder)
    }

    fn tree(&self, source: &str, options: &BuildOptions) -> DependencyTree<'_> {
        DependencyTree::new(&self.file_system, source).with_options(options.parser.clone())
    }

    fn compiler(&self, options: &BuildOptions) -> Compiler<'_> {
        let compiler = Compiler::new(&self.file_system, options.compiler.clone());
        match self.process.as_deref() {
            Some(process) => compiler.with_process(process),
            None => compiler,
        }
    }
}
