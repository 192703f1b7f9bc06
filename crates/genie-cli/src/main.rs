mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use genie_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();
    let config = Config::load()?;

    match cli.command {
        cli::Commands::Export {
            layout,
            grid_cols,
            hue,
            out,
            source,
        } => {
            let options = commands::export::ExportOptions {
                grid_cols,
                hue,
                out,
            };
            commands::export::handle(&layout, options, &source, &config).await
        }
        cli::Commands::Ls {
            path,
            recursive,
            source,
        } => commands::ls::handle(&path, recursive, &source, &config).await,
        cli::Commands::Config => commands::config::handle(&config),
    }
}
