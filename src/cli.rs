use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// jspackager - annotation-driven dependency resolver and packager
#[derive(Parser, Debug)]
#[command(name = "jspackager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./jspackager.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the load order of a source file, dependencies first
    Flatten {
        /// Entry script
        file: String,

        /// List each `@root` package by its root file instead of its contents
        #[arg(long)]
        packages: bool,

        /// Keep going when referenced files are missing
        #[arg(long)]
        mute: bool,
    },

    /// Print the compilation units of a source file
    Sets {
        /// Entry script
        file: String,

        /// Keep going when referenced files are missing
        #[arg(long)]
        mute: bool,
    },

    /// Compile a source file, or every source file in a folder
    Compile {
        /// Entry script or folder
        target: String,

        /// Compile without writing bundles and manifests
        #[arg(long)]
        dry_run: bool,

        /// Run the external minifier configured in [compiler]
        #[arg(long)]
        minify: bool,

        /// Keep going when referenced files are missing
        #[arg(long)]
        mute: bool,
    },

    /// Print the scripts and stylesheets a page has to load
    Resolve {
        /// Entry scripts, in page order
        #[arg(required = true)]
        files: Vec<String>,

        /// Resolve through compiled bundles and manifests
        #[arg(long)]
        compiled: bool,

        /// Fail instead of falling back to sources when a bundle is missing
        #[arg(long, requires = "compiled")]
        no_fallback: bool,
    },

    /// Remove compiled bundles and manifests under a folder
    Clean {
        /// Folder to clean
        folder: String,
    },
}
