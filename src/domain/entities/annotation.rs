//! Annotation entities - the directives scanned out of a source file

use serde::Serialize;

/// The closed set of directives recognised in source comments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AnnotationKind {
    /// `@require path...`
    Require,
    /// `@requireRemote path...`
    RequireRemote,
    /// `@requireStyle path...`
    RequireStyle,
    /// `@root`
    Root,
    /// `@tests path...`
    Tests,
}

impl AnnotationKind {
    pub const ALL: [AnnotationKind; 5] = [
        AnnotationKind::Require,
        AnnotationKind::RequireRemote,
        AnnotationKind::RequireStyle,
        AnnotationKind::Root,
        AnnotationKind::Tests,
    ];

    /// Keyword as written after the `@`
    pub fn keyword(&self) -> &'static str {
        match self {
            AnnotationKind::Require => "require",
            AnnotationKind::RequireRemote => "requireRemote",
            AnnotationKind::RequireStyle => "requireStyle",
            AnnotationKind::Root => "root",
            AnnotationKind::Tests => "tests",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }

    /// Whether arguments on the directive line are collected
    pub fn takes_arguments(&self) -> bool {
        !matches!(self, AnnotationKind::Root)
    }
}

/// One slot in the ordering map: which bucket, and which entry inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderEntry {
    pub action: AnnotationKind,
    pub annotation_index: usize,
}

/// Transient result of scanning one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    pub require: Vec<String>,
    pub require_remote: Vec<String>,
    pub require_style: Vec<String>,
    pub tests: Vec<String>,
    pub root: bool,
    pub ordering: Vec<OrderEntry>,
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one directive line
    pub fn record<'a>(&mut self, kind: AnnotationKind, arguments: impl IntoIterator<Item = &'a str>) {
        let bucket = match kind {
            AnnotationKind::Root => {
                self.root = true;
                self.ordering.push(OrderEntry {
                    action: kind,
                    annotation_index: 0,
                });
                return;
            }
            AnnotationKind::Require => &mut self.require,
            AnnotationKind::RequireRemote => &mut self.require_remote,
            AnnotationKind::RequireStyle => &mut self.require_style,
            AnnotationKind::Tests => &mut self.tests,
        };

        for argument in arguments {
            bucket.push(argument.to_string());
            self.ordering.push(OrderEntry {
                action: kind,
                annotation_index: bucket.len() - 1,
            });
        }
    }

    pub fn bucket(&self, kind: AnnotationKind) -> &[String] {
        match kind {
            AnnotationKind::Require => &self.require,
            AnnotationKind::RequireRemote => &self.require_remote,
            AnnotationKind::RequireStyle => &self.require_style,
            AnnotationKind::Tests => &self.tests,
            AnnotationKind::Root => &[],
        }
    }

    /// The argument an ordering entry points at (`None` for `@root`)
    pub fn argument(&self, entry: &OrderEntry) -> Option<&str> {
        self.bucket(entry.action)
            .get(entry.annotation_index)
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.ordering.is_empty()
    }
}
