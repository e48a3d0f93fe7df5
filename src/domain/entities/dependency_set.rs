//! DependencySet entity - one compilation unit

use serde::Serialize;

/// Files compiled together, plus the packages and stylesheets they lean on.
///
/// The last entry of `dependencies` is the unit's own root file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencySet {
    pub dependencies: Vec<String>,
    pub packages: Vec<String>,
    pub stylesheets: Vec<String>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the file that owns this unit
    pub fn owner(&self) -> Option<&str> {
        self.dependencies.last().map(String::as_str)
    }
}
