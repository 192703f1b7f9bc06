use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "genie")]
#[command(about = "Portable snapshots of arranged remote files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where folders are listed and files fetched from
#[derive(Args, Clone, Debug)]
pub struct SourceArgs {
    /// Base URL of the listing/file API (default from config)
    #[arg(long, env = "GENIE_API_URL", conflicts_with = "local")]
    pub api_url: Option<String>,

    /// Read from the local filesystem instead of a remote API
    #[arg(long)]
    pub local: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export a layout as a self-contained snapshot archive
    Export {
        /// Layout file (JSON: groups plus gridCols/hue)
        layout: PathBuf,

        /// Grid columns per group (overrides the layout)
        #[arg(long)]
        grid_cols: Option<u32>,

        /// Accent hue in degrees (overrides the layout)
        #[arg(long, allow_negative_numbers = true)]
        hue: Option<i64>,

        /// Directory to write the archive into
        #[arg(long)]
        out: Option<PathBuf>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// List a folder of the remote tree
    Ls {
        /// Folder path
        path: String,

        /// Resolve every nested folder into its files
        #[arg(long)]
        recursive: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show the config file location and effective values
    Config,
}
