//! Compiler
//!
//! Turns dependency sets into compiled bundles and manifests, and owns the
//! naming conventions both share with the manifest resolver:
//!
//! - `main.js` compiles to `main.compiled.js`
//! - its manifest is `main.js.manifest`
//! - anything that is not `.js` keeps its name

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::entities::{CompiledFile, DependencySet};
use crate::domain::ports::{CompilerProcess, FileHandler};
use crate::domain::services::dependency_tree::DependencyTree;
use crate::domain::services::tree_parser::ParserOptions;
use crate::domain::value_objects::{relative_to, split_path, RemoteConfig};
use crate::error::{PackagerError, PackagerResult};

pub const DEFAULT_COMPILATION_LEVEL: &str = "SIMPLE_OPTIMIZATIONS";
pub const DEFAULT_SUMMARY_DETAIL_LEVEL: u32 = 3;

const JS_EXTENSION: &str = ".js";
const COMPILED_EXTENSION: &str = ".compiled.js";
const MANIFEST_EXTENSION: &str = ".js.manifest";

/// `name.js` -> `name.compiled.js`
pub fn compiled_filename(path: &str) -> String {
    match path.strip_suffix(JS_EXTENSION) {
        Some(stem) => format!("{}{}", stem, COMPILED_EXTENSION),
        None => path.to_string(),
    }
}

/// `name.js` -> `name.js.manifest`
pub fn manifest_filename(path: &str) -> String {
    if path.ends_with(JS_EXTENSION) {
        format!("{}.manifest", path)
    } else {
        path.to_string()
    }
}

/// `name.compiled.js` -> `name.js`
pub fn source_filename_for_compiled(path: &str) -> String {
    match path.strip_suffix(COMPILED_EXTENSION) {
        Some(stem) => format!("{}{}", stem, JS_EXTENSION),
        None => path.to_string(),
    }
}

/// Whether `path` is a compiler artifact rather than a source file
pub fn is_compiler_artifact(path: &str) -> bool {
    path.ends_with(COMPILED_EXTENSION) || path.ends_with(MANIFEST_EXTENSION)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOptions {
    pub compilation_level: String,
    pub summary_detail_level: u32,
    pub remote: RemoteConfig,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            compilation_level: DEFAULT_COMPILATION_LEVEL.to_string(),
            summary_detail_level: DEFAULT_SUMMARY_DETAIL_LEVEL,
            remote: RemoteConfig::default(),
        }
    }
}

/// Bundles dependency sets and writes the results through a [`FileHandler`]
pub struct Compiler<'a> {
    handler: &'a dyn FileHandler,
    options: CompilerOptions,
    process: Option<&'a dyn CompilerProcess>,
}

impl<'a> Compiler<'a> {
    pub fn new(handler: &'a dyn FileHandler, options: CompilerOptions) -> Self {
        Self {
            handler,
            options,
            process: None,
        }
    }

    /// Minify through an external process instead of raw concatenation
    pub fn with_process(mut self, process: &'a dyn CompilerProcess) -> Self {
        self.process = Some(process);
        self
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Join the contents of `files` in order, with no separator
    pub fn concatenate_files(&self, files: &[String]) -> PackagerResult<String> {
        let mut buffer = String::new();
        for file in files {
            if !self.handler.is_file(Path::new(file)) {
                return Err(PackagerError::MissingFile { path: file.clone() });
            }
            buffer.push_str(&self.handler.read_to_string(Path::new(file))?);
        }
        Ok(buffer)
    }

    /// Arguments for the external compiler, inputs in dependency order
    pub fn generate_command_args(&self, files: &[String]) -> Vec<String> {
        let mut args = vec![
            format!("--compilation_level={}", self.options.compilation_level),
            format!("--summary_detail_level={}", self.options.summary_detail_level),
        ];
        for file in files {
            args.push("--js".to_string());
            args.push(file.clone());
        }
        args
    }

    /// Compile one unit into a bundle named after its owner.
    ///
    /// Remote scripts with a local mirror are compiled from the mirror.
    /// Without one they are listed verbatim in the manifest instead.
    pub fn compile_dependency_set(&self, set: &DependencySet) -> PackagerResult<CompiledFile> {
        let owner = set.owner().ok_or_else(|| PackagerError::Parsing {
            message: "Cannot compile an empty dependency set".to_string(),
            errors: String::new(),
        })?;
        let (dir, basename) = split_path(owner);

        let mut sources = Vec::new();
        let mut unmirrored_remotes = Vec::new();
        for dependency in &set.dependencies {
            if self.options.remote.is_remote(dependency) {
                match self.options.remote.local_path(dependency) {
                    Some(local) => sources.push(local),
                    None => unmirrored_remotes.push(dependency.clone()),
                }
            } else {
                sources.push(dependency.clone());
            }
        }

        let contents = match self.process {
            None => self.concatenate_files(&sources)?,
            Some(process) => self.run_process(process, &sources)?,
        };

        let mut manifest_lines: Vec<String> = set
            .packages
            .iter()
            .map(|package| relative_to(dir, &compiled_filename(package)))
            .collect();
        manifest_lines.extend(unmirrored_remotes);
        manifest_lines.extend(set.stylesheets.iter().map(|stylesheet| {
            if self.options.remote.is_remote(stylesheet) {
                stylesheet.clone()
            } else {
                relative_to(dir, stylesheet)
            }
        }));

        let manifest_contents = if manifest_lines.is_empty() {
            String::new()
        } else {
            format!("{}\n", manifest_lines.join("\n"))
        };

        info!(owner, files = sources.len(), "compiled dependency set");
        Ok(CompiledFile::new(
            dir,
            compiled_filename(basename),
            manifest_filename(basename),
            contents,
            manifest_contents,
        ))
    }

    fn run_process(&self, process: &dyn CompilerProcess, sources: &[String]) -> PackagerResult<String> {
        if let Some(missing) = sources.iter().find(|s| !self.handler.is_file(Path::new(s.as_str()))) {
            return Err(PackagerError::MissingFile {
                path: missing.clone(),
            });
        }

        let args = self.generate_command_args(sources);
        debug!(process = process.name(), ?args, "invoking compiler");
        let output = process.invoke(&args)?;
        if !output.success {
            return Err(PackagerError::CompilerProcess {
                message: format!(
                    "{} exited with {:?}: {}",
                    process.name(),
                    output.exit_code,
                    output.stderr.trim()
                ),
            });
        }
        Ok(output.stdout)
    }

    /// Compile every unit of a tree, packages first
    pub fn compile_tree(&self, tree: &DependencyTree<'_>) -> PackagerResult<Vec<CompiledFile>> {
        tree.get_dependency_sets()?
            .iter()
            .map(|set| self.compile_dependency_set(set))
            .collect()
    }

    /// Compile a whole tree, then write every bundle and manifest.
    ///
    /// Nothing is written unless every unit compiled.
    pub fn compile_and_write(&self, tree: &DependencyTree<'_>) -> PackagerResult<Vec<CompiledFile>> {
        let compiled = self.compile_tree(tree)?;
        self.write_all(&compiled)?;
        Ok(compiled)
    }

    /// Compile every unit under `folder`, then write them all
    pub fn compile_folder(
        &self,
        folder: &str,
        tree_options: &ParserOptions,
    ) -> PackagerResult<Vec<CompiledFile>> {
        let compiled = self.compile_folder_units(folder, tree_options)?;
        self.write_all(&compiled)?;
        Ok(compiled)
    }

    /// Treat every source file under `folder` as a build root and compile
    /// each distinct unit once, without writing anything
    pub fn compile_folder_units(
        &self,
        folder: &str,
        tree_options: &ParserOptions,
    ) -> PackagerResult<Vec<CompiledFile>> {
        let mut owners = HashSet::new();
        let mut compiled = Vec::new();

        for source in self.parse_folder_for_source_files(folder)? {
            let tree = DependencyTree::new(self.handler, &source).with_options(tree_options.clone());
            for set in tree.get_dependency_sets()? {
                let Some(owner) = set.owner() else {
                    continue;
                };
                if owners.insert(owner.to_string()) {
                    compiled.push(self.compile_dependency_set(&set)?);
                }
            }
        }

        Ok(compiled)
    }

    pub fn write_compiled_file(&self, file: &CompiledFile) -> PackagerResult<()> {
        let compiled_path = file.compiled_path();
        let manifest_path = file.manifest_path();
        self.handler.write(Path::new(&compiled_path), file.contents())?;
        self.handler
            .write(Path::new(&manifest_path), file.manifest_contents())?;
        info!(path = %compiled_path, hash = %file.content_hash(), "wrote bundle");
        Ok(())
    }

    fn write_all(&self, files: &[CompiledFile]) -> PackagerResult<()> {
        for file in files {
            self.write_compiled_file(file)?;
        }
        Ok(())
    }

    /// `.js` sources under `folder`, recursively, skipping compiler artifacts
    pub fn parse_folder_for_source_files(&self, folder: &str) -> PackagerResult<Vec<String>> {
        let mut files = self.walk_folder(folder)?;
        files.retain(|file| file.ends_with(JS_EXTENSION) && !is_compiler_artifact(file));
        Ok(files)
    }

    /// Delete every compiled bundle and manifest under `folder`
    pub fn clear_packages(&self, folder: &str) -> PackagerResult<Vec<String>> {
        let mut removed = Vec::new();
        for file in self.walk_folder(folder)? {
            if is_compiler_artifact(&file) {
                self.handler.remove(Path::new(&file))?;
                info!(path = %file, "removed compiler artifact");
                removed.push(file);
            }
        }
        Ok(removed)
    }

    fn walk_folder(&self, folder: &str) -> PackagerResult<Vec<String>> {
        let mut files = Vec::new();
        let trimmed = folder.trim_end_matches('/');
        let root = if trimmed.is_empty() && !folder.is_empty() {
            "/"
        } else {
            trimmed
        };
        let mut pending = vec![root.to_string()];

        while let Some(dir) = pending.pop() {
            let mut subdirs = Vec::new();
            for (entry, is_dir) in self.handler.list_dir(Path::new(&dir))? {
                let entry = entry.to_string_lossy().into_owned();
                if is_dir {
                    subdirs.push(entry);
                } else {
                    files.push(entry);
                }
            }
            pending.extend(subdirs.into_iter().rev());
        }

        Ok(files)
    }
}
