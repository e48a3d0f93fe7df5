//! Domain Layer
//!
//! The resolution engine: pure logic that reaches the file system and the
//! external compiler only through the traits in `ports/`.
//!
//! ## Structure
//!
//! - `entities/` - File, AnnotationSet, DependencySet, CompiledFile
//! - `value_objects/` - FileType and path normalization
//! - `services/` - tree parser, dependency tree, manifest resolver, compiler
//! - `ports/` - FileHandler and CompilerProcess

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
