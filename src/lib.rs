//! jspackager - annotation-driven dependency resolver for JavaScript and CSS
//!
//! Source files declare their dependencies in comment annotations
//! (`@require`, `@requireRemote`, `@requireStyle`, `@tests`, `@root`).
//! jspackager parses those into a dependency graph, flattens it into a load
//! order, splits it into compilation units at `@root` boundaries, and writes
//! a `.compiled.js` bundle plus a `.js.manifest` per unit. In production the
//! manifests are walked back to the bundles a page has to load.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{BuildOptions, BuildUseCase, LoadOptions, LoadPlan, ScriptLoader};
pub use config::Config;
pub use domain::entities::{CompiledFile, DependencySet, File};
pub use domain::services::{
    Compiler, CompilerOptions, DependencyTree, ManifestResolver, ParserOptions,
};
pub use domain::value_objects::{FileType, RemoteConfig};
pub use error::{ErrorKind, PackagerError, PackagerResult};
pub use fs::LocalFs;
pub use infrastructure::ClosureCompilerProcess;
