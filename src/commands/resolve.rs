//! Resolve command handler
//!
//! Prints what a page has to load for the given entry scripts.

use anyhow::Result;

use jspackager::application::{LoadOptions, ScriptLoader};
use jspackager::config::Config;
use jspackager::infrastructure::LocalFs;

use crate::ui::json::{emit_event, CompleteEvent, StartEvent};
use crate::ui::output::print_paths;

pub fn cmd_resolve(
    config: &Config,
    files: &[String],
    compiled: bool,
    no_fallback: bool,
    json: bool,
) -> Result<()> {
    if json {
        emit_event(&StartEvent::new("resolve"))?;
    }

    let mut options = LoadOptions::from_config(config);
    if compiled {
        options = options.with_compiled_scripts(true);
    }
    if no_fallback {
        options = options.with_fallback(false);
    }

    let loader = ScriptLoader::new(LocalFs::new(), options);
    let sources: Vec<&str> = files.iter().map(String::as_str).collect();
    let plan = loader.scripts_to_load_all(&sources)?;

    if json {
        emit_event(&CompleteEvent::new("resolve", &plan))?;
    } else {
        print_paths(&plan.scripts);
        print_paths(&plan.stylesheets);
    }

    Ok(())
}
