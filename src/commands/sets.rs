//! Sets command handler
//!
//! Prints the compilation units of an entry file, leaves first.

use anyhow::Result;

use jspackager::config::Config;
use jspackager::domain::services::DependencyTree;
use jspackager::infrastructure::LocalFs;

use crate::ui::json::{emit_event, CompleteEvent, StartEvent};
use crate::ui::output::print_section;

pub fn cmd_sets(config: &Config, file: &str, mute: bool, json: bool) -> Result<()> {
    if json {
        emit_event(&StartEvent::new("sets"))?;
    }

    let fs = LocalFs::new();
    let options = config.parser_options();
    let mute = mute || options.mute_missing_files;
    let sets = DependencyTree::new(&fs, file)
        .with_options(options)
        .with_mute_missing_files(mute)
        .get_dependency_sets()?;

    if json {
        emit_event(&CompleteEvent::new("sets", &sets))?;
        return Ok(());
    }

    for (index, set) in sets.iter().enumerate() {
        println!("[{}] {}", index + 1, set.owner().unwrap_or("<empty>"));
        print_section("dependencies", &set.dependencies);
        print_section("packages", &set.packages);
        print_section("stylesheets", &set.stylesheets);
    }

    Ok(())
}
