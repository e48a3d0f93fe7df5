//! Plain-text output helpers

pub fn print_paths<S: AsRef<str>>(paths: &[S]) {
    for path in paths {
        println!("{}", path.as_ref());
    }
}

/// Indented list under a heading, skipped entirely when empty
pub fn print_section<S: AsRef<str>>(heading: &str, paths: &[S]) {
    if paths.is_empty() {
        return;
    }
    println!("  {}:", heading);
    for path in paths {
        println!("    {}", path.as_ref());
    }
}
