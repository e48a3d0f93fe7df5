//! Scenario: scripts hosted on a shared remote location
//!
//! `@requireRemote` paths are kept behind the remote symbol. With a local
//! mirror they are compiled in; without one the manifest lists them and the
//! page loads them from the locally hosted path.

use jspackager::application::{BuildOptions, BuildUseCase, LoadOptions, ScriptLoader};
use jspackager::domain::services::{CompilerOptions, DependencyTree, ParserOptions};
use jspackager::domain::value_objects::RemoteConfig;
use jspackager::infrastructure::LocalFs;
use jspackager::ErrorKind;

use crate::common::*;

fn site() -> TestEnv {
    TestEnv::new()
        .with_file(
            "site/js/main.js",
            "// @requireRemote lib/common.js\n// @require dep_1.js\nwindow.main = true;\n",
        )
        .with_file("site/js/dep_1.js", "window.dep_1 = true;\n")
        .with_file("public/shared/lib/common.js", "window.common = true;\n")
}

fn mirrored(env: &TestEnv) -> RemoteConfig {
    RemoteConfig::default().with_shared_folder(Some(env.abs("public/shared")))
}

#[test]
fn scenario_remote_paths_stay_symbolic_in_the_tree() {
    let env = site();
    let fs = LocalFs::new();

    let order = DependencyTree::new(&fs, env.abs("site/js/main.js"))
        .flatten_dependency_tree(false)
        .unwrap();

    assert_eq!(
        order,
        [
            "@remote/lib/common.js".to_string(),
            env.abs("site/js/dep_1.js"),
            env.abs("site/js/main.js"),
        ]
    );
}

#[test]
fn scenario_mirrored_remote_is_compiled_in() {
    let env = site();
    let remote = mirrored(&env);
    let options = BuildOptions {
        dry_run: false,
        parser: ParserOptions::new().with_remote(remote.clone()),
        compiler: CompilerOptions {
            remote,
            ..CompilerOptions::default()
        },
    };

    BuildUseCase::new(LocalFs::new())
        .execute(&env.abs("site/js/main.js"), &options)
        .unwrap();

    assert_eq!(
        env.read("site/js/main.compiled.js"),
        "window.common = true;\nwindow.dep_1 = true;\n\
         // @requireRemote lib/common.js\n// @require dep_1.js\nwindow.main = true;\n"
    );
    assert_eq!(env.read("site/js/main.js.manifest"), "");
}

#[test]
fn scenario_unmirrored_remote_is_loaded_from_the_hosted_path() {
    let env = site();
    let build = BuildUseCase::new(LocalFs::new());

    build
        .execute(&env.abs("site/js/main.js"), &BuildOptions::default())
        .unwrap();
    assert_eq!(env.read("site/js/main.js.manifest"), "@remote/lib/common.js\n");
    assert_eq!(
        env.read("site/js/main.compiled.js"),
        "window.dep_1 = true;\n// @requireRemote lib/common.js\n// @require dep_1.js\nwindow.main = true;\n"
    );

    let loader = ScriptLoader::new(
        LocalFs::new(),
        LoadOptions::default().with_compiled_scripts(true),
    );
    let plan = loader.scripts_to_load(&env.abs("site/js/main.js")).unwrap();

    assert_eq!(
        plan.scripts,
        [
            "shared/lib/common.js".to_string(),
            env.abs("site/js/main.compiled.js"),
        ]
    );
}

#[test]
fn scenario_missing_mirror_file_is_reported() {
    let env = TestEnv::new().with_file("site/js/main.js", "// @requireRemote lib/gone.js\n");
    let fs = LocalFs::new();
    let remote = RemoteConfig::default().with_shared_folder(Some(env.abs("public/shared")));

    let err = DependencyTree::new(&fs, env.abs("site/js/main.js"))
        .with_remote(remote)
        .get_tree()
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parsing);
    assert!(err.to_string().contains("public/shared/lib/gone.js"));
}
