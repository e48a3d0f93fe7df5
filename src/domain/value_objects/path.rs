//! Source path helpers
//!
//! Dependency paths are handled as `/`-separated strings rather than
//! `PathBuf`s: the exact textual shape ends up in manifests and is compared
//! downstream, so the helpers here never touch the file system and never
//! canonicalize.

/// Collapse `segment/..` pairs and drop `.` segments.
///
/// A `..` that would climb above the start of the path is kept instead of
/// rejected, so `/a/../../b` becomes `/../b`. A trailing slash survives.
pub fn normalize_relative_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').collect();
    let last = segments.len().saturating_sub(1);
    let mut stack: Vec<&str> = Vec::with_capacity(segments.len());

    for (i, segment) in segments.iter().copied().enumerate() {
        match segment {
            "." if segments.len() > 1 => {
                // "a/." keeps its trailing slash
                if i == last {
                    stack.push("");
                }
            }
            ".." => match stack.last() {
                Some(&top) if top != ".." && !top.is_empty() && top != "." => {
                    stack.pop();
                }
                _ => stack.push(".."),
            },
            _ => stack.push(segment),
        }
    }

    if stack.is_empty() {
        return ".".to_string();
    }
    stack.join("/")
}

/// Split a path into its directory and final component.
///
/// `"lib/main.js"` gives `("lib", "main.js")`, `"/main.js"` gives
/// `("/", "main.js")` and a bare `"main.js"` gives `("", "main.js")`.
pub fn split_path(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(0) => ("/", &path[1..]),
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    }
}

/// Join a directory and a name without doubling separators
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else if dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Resolve a reference written inside a file living in `dir`
pub fn resolve_reference(dir: &str, reference: &str) -> String {
    if reference.starts_with('/') {
        normalize_relative_path(reference)
    } else {
        normalize_relative_path(&join_path(dir, reference))
    }
}

/// Express `target` relative to the directory `base_dir`.
///
/// Both inputs are expected to be normalized and rooted the same way
/// (both absolute or both relative to the same working directory).
pub fn relative_to(base_dir: &str, target: &str) -> String {
    if base_dir.is_empty() || base_dir == "." {
        return target.to_string();
    }

    let base: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();
    let (target_dir, target_name) = split_path(target);
    let dir: Vec<&str> = target_dir.split('/').filter(|s| !s.is_empty()).collect();

    let common = base
        .iter()
        .zip(dir.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = Vec::new();
    parts.extend(std::iter::repeat("..").take(base.len() - common));
    parts.extend(dir[common..].iter().copied());
    parts.push(target_name);
    parts.join("/")
}
