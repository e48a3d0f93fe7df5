//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - Compiles an entry file or folder into bundles and manifests
//! - `ScriptLoader` - Resolves what a page has to load, from sources or bundles

pub mod build;
pub mod script_loader;

pub use build::{ArtifactSummary, BuildOptions, BuildResult, BuildUseCase};
pub use script_loader::{LoadOptions, LoadPlan, ScriptLoader};
