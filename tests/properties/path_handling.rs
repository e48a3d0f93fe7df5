//! Property tests for path normalization and manifest-relative paths.

use proptest::prelude::*;

use jspackager::domain::value_objects::{
    normalize_relative_path, relative_to, resolve_reference, split_path,
};

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => proptest::string::string_regex("[a-z0-9_]{1,6}").unwrap(),
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn dotted_path() -> impl Strategy<Value = String> {
    (any::<bool>(), proptest::collection::vec(segment(), 1..=8)).prop_map(|(absolute, segments)| {
        let joined = segments.join("/");
        if absolute {
            format!("/{}", joined)
        } else {
            joined
        }
    })
}

fn plain_path() -> impl Strategy<Value = String> {
    let name = proptest::string::string_regex("[a-z0-9_]{1,6}").unwrap();
    proptest::collection::vec(name, 1..=5).prop_map(|segments| format!("/{}", segments.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: normalization never panics on arbitrary input.
    #[test]
    fn property_normalize_never_panics(s in "(?s).{0,128}") {
        let _ = normalize_relative_path(&s);
    }

    /// PROPERTY: normalizing twice changes nothing.
    #[test]
    fn property_normalize_is_idempotent(path in dotted_path()) {
        let once = normalize_relative_path(&path);
        prop_assert_eq!(normalize_relative_path(&once), once);
    }

    /// PROPERTY: a normalized path has no `.` segments and no collapsible `name/..` pairs.
    #[test]
    fn property_normalized_paths_are_collapsed(path in dotted_path()) {
        let normalized = normalize_relative_path(&path);
        if normalized != "." {
            let segments: Vec<&str> = normalized.split('/').collect();
            prop_assert!(!segments.contains(&"."), "{} -> {}", path, normalized);
            for pair in segments.windows(2) {
                let collapsible = pair[1] == ".." && pair[0] != ".." && !pair[0].is_empty();
                prop_assert!(!collapsible, "{} -> {}", path, normalized);
            }
        }
    }

    /// PROPERTY: a path made relative to a directory resolves back to itself.
    #[test]
    fn property_relative_to_round_trips(base in plain_path(), target in plain_path()) {
        let target = format!("{}.js", target);
        let relative = relative_to(&base, &target);
        prop_assert_eq!(resolve_reference(&base, &relative), target);
    }

    /// PROPERTY: splitting and rejoining a path gives it back.
    #[test]
    fn property_split_path_keeps_every_character(path in plain_path()) {
        let (dir, name) = split_path(&path);
        let rejoined = if dir == "/" {
            format!("/{}", name)
        } else {
            format!("{}/{}", dir, name)
        };
        prop_assert_eq!(rejoined, path);
    }
}
