//! Clean command handler
//!
//! Removes compiled bundles and manifests under a folder.

use anyhow::Result;

use jspackager::application::BuildUseCase;
use jspackager::infrastructure::LocalFs;

use crate::ui::json::{emit_event, CompleteEvent, StartEvent};

pub fn cmd_clean(folder: &str, json: bool) -> Result<()> {
    if json {
        emit_event(&StartEvent::new("clean"))?;
    }

    let removed = BuildUseCase::new(LocalFs::new()).clean(folder)?;

    if json {
        emit_event(&CompleteEvent::new("clean", &removed))?;
    } else {
        for path in &removed {
            println!("Removed {}", path);
        }
        println!("✓ {} file(s) removed", removed.len());
    }

    Ok(())
}
