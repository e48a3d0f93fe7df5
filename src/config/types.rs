//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::{
    CompilerOptions, ParserOptions, DEFAULT_COMPILATION_LEVEL, DEFAULT_SUMMARY_DETAIL_LEVEL,
};
use crate::domain::value_objects::{RemoteConfig, DEFAULT_REMOTE_SYMBOL};
use crate::error::PackagerResult;
use crate::infrastructure::ClosureCompilerProcess;

use super::loader::{self, ConfigWarning};

/// Remote (externally hosted) file configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSection {
    #[serde(default = "default_remote_symbol")]
    pub symbol: String,

    /// Server-side folder mirroring the remote files
    #[serde(default)]
    pub shared_folder: Option<String>,

    /// Browser-relative mount substituted for the symbol when loading
    #[serde(default = "default_locally_hosted_path")]
    pub locally_hosted_path: String,
}

impl Default for RemoteSection {
    fn default() -> Self {
        Self {
            symbol: default_remote_symbol(),
            shared_folder: None,
            locally_hosted_path: default_locally_hosted_path(),
        }
    }
}

fn default_remote_symbol() -> String {
    DEFAULT_REMOTE_SYMBOL.to_string()
}

fn default_locally_hosted_path() -> String {
    "shared".to_string()
}

/// Compiler configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerSection {
    #[serde(default = "default_compilation_level")]
    pub compilation_level: String,

    #[serde(default = "default_summary_detail_level")]
    pub summary_detail_level: u32,

    /// Run the external compiler instead of plain concatenation
    #[serde(default)]
    pub minify: bool,

    #[serde(default = "default_command")]
    pub command: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for CompilerSection {
    fn default() -> Self {
        Self {
            compilation_level: default_compilation_level(),
            summary_detail_level: default_summary_detail_level(),
            minify: false,
            command: default_command(),
            args: default_args(),
        }
    }
}

fn default_compilation_level() -> String {
    DEFAULT_COMPILATION_LEVEL.to_string()
}

fn default_summary_detail_level() -> u32 {
    DEFAULT_SUMMARY_DETAIL_LEVEL
}

fn default_command() -> String {
    "java".to_string()
}

fn default_args() -> Vec<String> {
    vec!["-jar".to_string(), "vendor/closure-compiler.jar".to_string()]
}

/// Resolution configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveSection {
    /// Load compiled bundles through their manifests
    #[serde(default)]
    pub use_compiled_scripts: bool,

    #[serde(default = "default_true")]
    pub fallback_if_missing_compiled_script: bool,

    #[serde(default)]
    pub mute_missing_files: bool,

    #[serde(default)]
    pub tests_source_path: Option<String>,
}

impl Default for ResolveSection {
    fn default() -> Self {
        Self {
            use_compiled_scripts: false,
            fallback_if_missing_compiled_script: true,
            mute_missing_files: false,
            tests_source_path: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteSection,

    #[serde(default)]
    pub compiler: CompilerSection,

    #[serde(default)]
    pub resolve: ResolveSection,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PackagerResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PackagerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Explicit path, then `jspackager.toml` in `working_dir`, then defaults
    pub fn discover(
        explicit: Option<&Path>,
        working_dir: &Path,
    ) -> PackagerResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, working_dir)
    }

    /// Apply environment variable overrides (JSPACKAGER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn remote_config(&self) -> RemoteConfig {
        RemoteConfig::new(self.remote.symbol.clone())
            .with_shared_folder(self.remote.shared_folder.clone())
    }

    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions::new()
            .with_mute_missing_files(self.resolve.mute_missing_files)
            .with_tests_source_path(self.resolve.tests_source_path.clone())
            .with_remote(self.remote_config())
    }

    pub fn compiler_options(&self) -> CompilerOptions {
        CompilerOptions {
            compilation_level: self.compiler.compilation_level.clone(),
            summary_detail_level: self.compiler.summary_detail_level,
            remote: self.remote_config(),
        }
    }

    /// The external compiler, when minification is on
    pub fn compiler_process(&self) -> Option<ClosureCompilerProcess> {
        self.compiler.minify.then(|| {
            ClosureCompilerProcess::new(self.compiler.command.clone(), self.compiler.args.clone())
        })
    }
}
