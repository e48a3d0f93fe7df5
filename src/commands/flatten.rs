//! Flatten command handler

use anyhow::Result;

use jspackager::config::Config;
use jspackager::domain::services::DependencyTree;
use jspackager::infrastructure::LocalFs;

use crate::ui::json::{emit_event, CompleteEvent, StartEvent};
use crate::ui::output::print_paths;

pub fn cmd_flatten(config: &Config, file: &str, packages: bool, mute: bool, json: bool) -> Result<()> {
    if json {
        emit_event(&StartEvent::new("flatten"))?;
    }

    let fs = LocalFs::new();
    let options = config.parser_options();
    let mute = mute || options.mute_missing_files;
    let tree = DependencyTree::new(&fs, file)
        .with_options(options)
        .with_mute_missing_files(mute);

    let order = tree.flatten_dependency_tree(packages)?;

    if json {
        emit_event(&CompleteEvent::new("flatten", &order))?;
    } else {
        print_paths(&order);
    }

    Ok(())
}
