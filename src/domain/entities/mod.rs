//! Domain Entities
//!
//! - `File` - a node of the dependency graph
//! - `AnnotationSet` - directives scanned out of one file
//! - `DependencySet` - one compilation unit
//! - `CompiledFile` - a compiled bundle plus manifest

mod annotation;
mod compiled_file;
mod dependency_set;
mod file;

pub use annotation::{AnnotationKind, AnnotationSet, OrderEntry};
pub use compiled_file::CompiledFile;
pub use dependency_set::DependencySet;
pub use file::File;
