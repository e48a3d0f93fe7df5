//! jspackager CLI
//!
//! Usage: jspackager <COMMAND>
//!
//! Commands:
//!   flatten  Print the load order of a source file
//!   sets     Print the compilation units of a source file
//!   compile  Write compiled bundles and manifests
//!   resolve  Print what a page has to load
//!   clean    Remove compiled bundles and manifests

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use cli::{Cli, Commands};
use jspackager::config::Config;

/// Environment variable holding a `tracing` filter, e.g. `jspackager=debug`
const LOG_ENV: &str = "JSPACKAGER_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let working_dir = std::env::current_dir()?;
    let (config, _warnings) = Config::discover(cli.config.as_deref(), &working_dir)?;

    match cli.command {
        Commands::Flatten {
            file,
            packages,
            mute,
        } => commands::flatten::cmd_flatten(&config, &file, packages, mute, cli.json),
        Commands::Sets { file, mute } => commands::sets::cmd_sets(&config, &file, mute, cli.json),
        Commands::Compile {
            target,
            dry_run,
            minify,
            mute,
        } => commands::compile::cmd_compile(&config, &target, dry_run, minify, mute, cli.json),
        Commands::Resolve {
            files,
            compiled,
            no_fallback,
        } => commands::resolve::cmd_resolve(&config, &files, compiled, no_fallback, cli.json),
        Commands::Clean { folder } => commands::clean::cmd_clean(&folder, cli.json),
    }
}

/// Logs go to stderr so stdout stays parseable.
///
/// `JSPACKAGER_LOG` wins over `-v`; without either only warnings are shown.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("jspackager={}", level)));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
