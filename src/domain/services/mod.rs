//! Domain Services
//!
//! Resolution and packaging logic over the domain entities. File system
//! and process access goes through the port traits only, so everything
//! here runs against the in-memory mock in tests.

pub mod annotation_parser;
pub mod compiler;
pub mod dependency_tree;
pub mod manifest_resolver;
pub mod tree_parser;

pub use annotation_parser::{parse_annotation_line, scan_annotations};
pub use compiler::{
    compiled_filename, is_compiler_artifact, manifest_filename, source_filename_for_compiled,
    Compiler, CompilerOptions, DEFAULT_COMPILATION_LEVEL, DEFAULT_SUMMARY_DETAIL_LEVEL,
};
pub use dependency_tree::{dedup_keep_first, DependencyTree};
pub use manifest_resolver::ManifestResolver;
pub use tree_parser::{DependencyTreeParser, ParserOptions};
