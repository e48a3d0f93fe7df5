//! Reusable source trees.

use super::TestEnv;

/// Two plain dependencies; the first pulls in a package that nests a
/// second package, each with its own stylesheet.
///
/// ```text
/// site/js/main.js
/// ├── dep_1.js
/// │   └── package/dep_3.js            @root, dep_3_style.css
/// │       └── subpackage/dep_4.js     @root, dep_4_style.css
/// │           └── dep_5.js
/// └── dep_2.js
/// ```
pub fn deep_packages() -> TestEnv {
    TestEnv::new()
        .with_file(
            "site/js/main.js",
            "// @require dep_1.js\n// @require dep_2.js\nwindow.main = true;\n",
        )
        .with_file(
            "site/js/dep_1.js",
            "// @require package/dep_3.js\nwindow.dep_1 = true;\n",
        )
        .with_file("site/js/dep_2.js", "window.dep_2 = true;\n")
        .with_file(
            "site/js/package/dep_3.js",
            "// @root\n// @requireStyle dep_3_style.css\n// @require subpackage/dep_4.js\nwindow.dep_3 = true;\n",
        )
        .with_file("site/js/package/dep_3_style.css", ".dep_3 {}\n")
        .with_file(
            "site/js/package/subpackage/dep_4.js",
            "// @root\n// @requireStyle dep_4_style.css\n// @require dep_5.js\nwindow.dep_4 = true;\n",
        )
        .with_file("site/js/package/subpackage/dep_4_style.css", ".dep_4 {}\n")
        .with_file("site/js/package/subpackage/dep_5.js", "window.dep_5 = true;\n")
}

/// Three files that require one another in a loop
pub fn cycle() -> TestEnv {
    TestEnv::new()
        .with_file("site/js/a.js", "// @require b.js\n")
        .with_file("site/js/b.js", "// @require c.js\n")
        .with_file("site/js/c.js", "// @require a.js\n")
}

/// An entry that requires a file nobody wrote
pub fn dangling() -> TestEnv {
    TestEnv::new()
        .with_file("site/js/main.js", "// @require dep_1.js\n// @require gone.js\n")
        .with_file("site/js/dep_1.js", "")
}
