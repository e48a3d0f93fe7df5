//! Annotation scanner
//!
//! Reads a source file line by line and picks out `@require`,
//! `@requireRemote`, `@requireStyle`, `@root` and `@tests` directives. The
//! JS itself is never parsed: any line carrying a directive token counts,
//! whatever comment syntax or text precedes it.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::entities::{AnnotationKind, AnnotationSet};
use crate::domain::ports::FileHandler;
use crate::error::PackagerResult;

fn annotation_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?:^|[^\w@])@(requireRemote|requireStyle|require|root|tests)(?:\s+(.*?))?\s*$")
            .expect("annotation regex must compile")
    })
}

/// Match one line against the directive grammar.
///
/// Returns the directive and its whitespace separated arguments. `@root`
/// never carries arguments.
pub fn parse_annotation_line(line: &str) -> Option<(AnnotationKind, Vec<&str>)> {
    let captures = annotation_regex().captures(line)?;
    let kind = AnnotationKind::from_keyword(captures.get(1)?.as_str())?;

    let arguments = match captures.get(2) {
        Some(args) if kind.takes_arguments() => args.as_str().split_whitespace().collect(),
        _ => Vec::new(),
    };
    Some((kind, arguments))
}

/// Scan a whole file for directives.
///
/// The read handle is released when this returns, on success and on error.
pub fn scan_annotations(handler: &dyn FileHandler, path: &str) -> PackagerResult<AnnotationSet> {
    let mut annotations = AnnotationSet::new();
    let mut reader = handler.open_for_read(Path::new(path))?;

    while let Some(line) = reader.read_line()? {
        if let Some((kind, arguments)) = parse_annotation_line(&line) {
            annotations.record(kind, arguments);
        }
    }

    Ok(annotations)
}
