//! Scenario: develop against sources, then ship compiled bundles
//!
//! Journey:
//! 1. A page loads `main.js` straight from sources
//! 2. The site is compiled into bundles and manifests
//! 3. The page switches to compiled scripts
//! 4. The build output is cleaned away again

use jspackager::application::{BuildOptions, BuildUseCase, LoadOptions, ScriptLoader};
use jspackager::domain::services::DependencyTree;
use jspackager::infrastructure::LocalFs;

use crate::common::*;

#[test]
fn scenario_sources_load_dependencies_first() {
    let env = deep_packages();
    let fs = LocalFs::new();

    let order = DependencyTree::new(&fs, env.abs("site/js/main.js"))
        .flatten_dependency_tree(false)
        .unwrap();

    let expected: Vec<String> = [
        "site/js/package/subpackage/dep_5.js",
        "site/js/package/subpackage/dep_4_style.css",
        "site/js/package/subpackage/dep_4.js",
        "site/js/package/dep_3_style.css",
        "site/js/package/dep_3.js",
        "site/js/dep_1.js",
        "site/js/dep_2.js",
        "site/js/main.js",
    ]
    .iter()
    .map(|p| env.abs(p))
    .collect();
    assert_eq!(order, expected);
}

#[test]
fn scenario_package_boundaries_keep_what_bundles_leave_out() {
    let env = deep_packages();
    let fs = LocalFs::new();

    let order = DependencyTree::new(&fs, env.abs("site/js/main.js"))
        .flatten_dependency_tree(true)
        .unwrap();

    assert_eq!(
        order,
        [
            env.abs("site/js/package/dep_3_style.css"),
            env.abs("site/js/package/subpackage/dep_4.js"),
            env.abs("site/js/package/dep_3.js"),
            env.abs("site/js/dep_1.js"),
            env.abs("site/js/dep_2.js"),
            env.abs("site/js/main.js"),
        ]
    );
}

#[test]
fn scenario_compile_then_load_bundles() {
    let env = deep_packages();
    let build = BuildUseCase::new(LocalFs::new());

    // Step 2: compile and write
    let result = build
        .execute(&env.abs("site/js/main.js"), &BuildOptions::default())
        .unwrap();
    assert!(result.written);
    assert_eq!(result.compiled.len(), 3);

    assert_eq!(
        env.read("site/js/main.compiled.js"),
        "// @require package/dep_3.js\nwindow.dep_1 = true;\nwindow.dep_2 = true;\n\
         // @require dep_1.js\n// @require dep_2.js\nwindow.main = true;\n"
    );
    assert_eq!(env.read("site/js/main.js.manifest"), "package/dep_3.compiled.js\n");
    assert_eq!(
        env.read("site/js/package/dep_3.js.manifest"),
        "subpackage/dep_4.compiled.js\ndep_3_style.css\n"
    );
    assert_eq!(
        env.read("site/js/package/subpackage/dep_4.js.manifest"),
        "dep_4_style.css\n"
    );

    // Step 3: load compiled scripts
    let loader = ScriptLoader::new(
        LocalFs::new(),
        LoadOptions::default().with_compiled_scripts(true),
    );
    let plan = loader.scripts_to_load(&env.abs("site/js/main.js")).unwrap();

    assert_eq!(
        plan.scripts,
        [
            env.abs("site/js/package/subpackage/dep_4.compiled.js"),
            env.abs("site/js/package/dep_3.compiled.js"),
            env.abs("site/js/main.compiled.js"),
        ]
    );
    assert_eq!(
        plan.stylesheets,
        [
            env.abs("site/js/package/subpackage/dep_4_style.css"),
            env.abs("site/js/package/dep_3_style.css"),
        ]
    );

    // Step 4: clean
    let removed = build.clean(&env.abs("site")).unwrap();
    assert_eq!(removed.len(), 6);
    assert!(!env.exists("site/js/main.compiled.js"));
    assert!(!env.exists("site/js/package/dep_3.js.manifest"));
    assert!(env.exists("site/js/package/dep_3.js"));
}

#[test]
fn scenario_folder_build_compiles_every_file_once() {
    let env = deep_packages();
    let build = BuildUseCase::new(LocalFs::new());

    let result = build
        .execute(&env.abs("site/js"), &BuildOptions::default().with_dry_run(true))
        .unwrap();

    assert!(!result.written);
    assert_eq!(result.compiled.len(), 6);
    assert!(!env.exists("site/js/dep_2.compiled.js"));
}

#[test]
fn scenario_missing_bundle_falls_back_to_sources() {
    let env = deep_packages();
    let loader = ScriptLoader::new(
        LocalFs::new(),
        LoadOptions::default().with_compiled_scripts(true),
    );

    let plan = loader.scripts_to_load(&env.abs("site/js/main.js")).unwrap();

    assert_eq!(plan.scripts.len(), 6);
    assert_eq!(plan.scripts.last(), Some(&env.abs("site/js/main.js")));
}
