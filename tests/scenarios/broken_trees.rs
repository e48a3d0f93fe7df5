//! Scenario: annotations that point at nothing, or at each other

use jspackager::domain::services::DependencyTree;
use jspackager::infrastructure::LocalFs;
use jspackager::{ErrorKind, PackagerError};

use crate::common::*;

#[test]
fn scenario_cycle_reports_the_chain() {
    let env = cycle();
    let fs = LocalFs::new();

    let err = DependencyTree::new(&fs, env.abs("site/js/a.js"))
        .flatten_dependency_tree(false)
        .unwrap_err();

    match err {
        PackagerError::Recursion { path, chain } => {
            assert_eq!(path, env.abs("site/js/a.js"));
            assert_eq!(
                chain,
                [
                    env.abs("site/js/a.js"),
                    env.abs("site/js/b.js"),
                    env.abs("site/js/c.js"),
                    env.abs("site/js/a.js"),
                ]
            );
        }
        other => panic!("expected recursion, got {:?}", other),
    }
}

#[test]
fn scenario_dangling_reference_names_both_files() {
    let env = dangling();
    let fs = LocalFs::new();

    let err = DependencyTree::new(&fs, env.abs("site/js/main.js"))
        .get_dependency_sets()
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parsing);
    assert_eq!(
        err.to_string(),
        format!(
            "Failed to include missing file \"{}\" while trying to parse \"{}\"",
            env.abs("site/js/gone.js"),
            env.abs("site/js/main.js")
        )
    );
}

#[test]
fn scenario_muted_tree_still_flattens() {
    let env = dangling();
    let fs = LocalFs::new();

    let order = DependencyTree::new(&fs, env.abs("site/js/main.js"))
        .with_mute_missing_files(true)
        .flatten_dependency_tree(false)
        .unwrap();

    assert_eq!(
        order,
        [
            env.abs("site/js/dep_1.js"),
            env.abs("site/js/gone.js"),
            env.abs("site/js/main.js"),
        ]
    );
}

#[test]
fn scenario_missing_entry_is_missing_file() {
    let env = TestEnv::new();
    let fs = LocalFs::new();

    let err = DependencyTree::new(&fs, env.abs("site/js/main.js"))
        .with_mute_missing_files(true)
        .get_tree()
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingFile);
    assert_eq!(err.missing_path(), Some(env.abs("site/js/main.js").as_str()));
}

#[test]
fn scenario_latin1_comment_does_not_stop_the_scan() {
    let env = TestEnv::new().with_file("site/js/dep_1.js", "window.dep_1 = true;\n");
    std::fs::write(
        env.project_path("site/js/main.js"),
        b"/* \xa9 2013 Acme */\n// @require dep_1.js\n",
    )
    .unwrap();
    let fs = LocalFs::new();

    let order = DependencyTree::new(&fs, env.abs("site/js/main.js"))
        .flatten_dependency_tree(false)
        .unwrap();

    assert_eq!(order, [env.abs("site/js/dep_1.js"), env.abs("site/js/main.js")]);
}
