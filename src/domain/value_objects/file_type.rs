//! FileType value object - what kind of source a dependency path names

use serde::{Deserialize, Serialize};

/// Source kind, derived from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// JavaScript, scanned for annotations
    #[default]
    Js,
    /// Stylesheet, always terminal
    Css,
}

impl FileType {
    /// Classify by extension; anything that is not `css` is treated as script
    pub fn from_extension(ext: &str) -> Self {
        if ext.eq_ignore_ascii_case("css") {
            FileType::Css
        } else {
            FileType::Js
        }
    }

    /// Classify a full path by its last extension
    pub fn from_path(path: &str) -> Self {
        match path.rsplit_once('.') {
            Some((_, ext)) if !ext.contains('/') => Self::from_extension(ext),
            _ => FileType::Js,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileType::Js => "js",
            FileType::Css => "css",
        }
    }

    pub fn is_stylesheet(&self) -> bool {
        matches!(self, FileType::Css)
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
