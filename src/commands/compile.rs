//! Compile command handler

use anyhow::{bail, Result};

use jspackager::application::{BuildOptions, BuildUseCase};
use jspackager::config::Config;
use jspackager::domain::ports::CompilerProcess;
use jspackager::infrastructure::LocalFs;

use crate::ui::json::{emit_event, CompleteEvent, StartEvent};

pub fn cmd_compile(
    config: &Config,
    target: &str,
    dry_run: bool,
    minify: bool,
    mute: bool,
    json: bool,
) -> Result<()> {
    if json {
        emit_event(&StartEvent::new("compile"))?;
    }

    let mut config = config.clone();
    config.compiler.minify |= minify;

    let process = config.compiler_process();
    if let Some(process) = &process {
        if !process.check_available() {
            bail!(
                "compiler command '{}' is not available; install it or set [compiler].command",
                process.command()
            );
        }
    }
    let process = process.map(|p| Box::new(p) as Box<dyn CompilerProcess>);

    let options = BuildOptions::from_config(&config)
        .with_dry_run(dry_run)
        .with_mute_missing_files(mute || config.resolve.mute_missing_files);
    let build = BuildUseCase::new(LocalFs::new()).with_process(process);

    let result = build.execute(target, &options)?;
    let summaries = result.summaries();

    if json {
        emit_event(&CompleteEvent::new(
            "compile",
            serde_json::json!({
                "written": result.written,
                "artifacts": summaries,
            }),
        ))?;
        return Ok(());
    }

    let verb = if result.written { "Wrote" } else { "Would write" };
    for summary in &summaries {
        println!("{} {} ({} bytes, {})", verb, summary.compiled_path, summary.bytes, summary.hash);
        println!("{} {} ({} entries)", verb, summary.manifest_path, summary.manifest_entries);
    }
    println!("✓ {} bundle(s) compiled", summaries.len());

    Ok(())
}
