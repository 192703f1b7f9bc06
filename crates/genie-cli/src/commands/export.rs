use anyhow::{Context, Result};
use genie_config::Config;
use genie_core::{Layout, LayoutConfig};
use genie_engine::{ExportEvent, Exporter, save_archive};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::cli::SourceArgs;
use crate::commands::build_tree;

/// Command-line overrides for one export
#[derive(Debug, Default)]
pub struct ExportOptions {
    pub grid_cols: Option<u32>,
    pub hue: Option<i64>,
    pub out: Option<PathBuf>,
}

pub async fn handle(
    layout_path: &Path,
    options: ExportOptions,
    source: &SourceArgs,
    config: &Config,
) -> Result<()> {
    let content = std::fs::read_to_string(layout_path)
        .with_context(|| format!("Failed to read layout {}", layout_path.display()))?;
    let layout = Layout::from_json(&content)
        .with_context(|| format!("Invalid layout {}", layout_path.display()))?;

    let (grid_cols, hue) = resolve_display(&options, &layout.config, config);
    let out_dir = options
        .out
        .clone()
        .unwrap_or_else(|| config.export.output_dir.clone());

    let tree = build_tree(source, config)?;
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let exporter = Exporter::new(tree)
        .with_max_depth(config.export.max_depth)
        .with_progress(tx);

    let failures = tokio::spawn(async move {
        let mut failures = Vec::new();
        while let Some(event) = rx.recv().await {
            if let ExportEvent::Failed { name, reason } = event {
                warn!("Skipped {}: {}", name, reason);
                failures.push((name, reason));
            }
        }
        failures
    });

    let result = exporter
        .export_snapshot(layout.groups, grid_cols, hue)
        .await;
    drop(exporter);
    let failures = failures.await.unwrap_or_default();

    let archive = result.context("Export failed")?;
    let path = save_archive(&archive.bytes, &archive.filename, &out_dir).await?;
    info!("Saved snapshot to {}", path.display());

    println!("✓ Snapshot written: {}", path.display());
    println!("  Groups: {}", archive.groups.len());
    println!("  Assets: {}", archive.asset_count);
    println!("  Size: {} bytes", archive.bytes.len());

    if !failures.is_empty() {
        println!("\nFailed files ({}):", failures.len());
        for (name, reason) in &failures {
            println!("  ✗ {} ({})", name, reason);
        }
    }

    Ok(())
}

/// Flag beats layout, layout beats config file
fn resolve_display(options: &ExportOptions, layout: &LayoutConfig, config: &Config) -> (u32, i64) {
    let grid_cols = options
        .grid_cols
        .or(layout.grid_cols)
        .unwrap_or(config.export.grid_cols);
    let hue = options.hue.or(layout.hue).unwrap_or(config.export.hue);
    (grid_cols, hue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_display_precedence() {
        let mut config = Config::default();
        config.export.grid_cols = 2;
        config.export.hue = 10;

        let layout = LayoutConfig {
            grid_cols: Some(4),
            hue: None,
        };

        let none = ExportOptions::default();
        assert_eq!(resolve_display(&none, &layout, &config), (4, 10));

        let flags = ExportOptions {
            grid_cols: Some(3),
            hue: Some(250),
            out: None,
        };
        assert_eq!(resolve_display(&flags, &layout, &config), (3, 250));

        let empty = LayoutConfig::default();
        assert_eq!(resolve_display(&none, &empty, &config), (2, 10));
    }

    #[tokio::test]
    async fn test_export_local_layout() {
        let temp = tempfile::tempdir().unwrap();
        let photos = temp.path().join("photos");
        std::fs::create_dir_all(&photos).unwrap();
        std::fs::write(photos.join("a.png"), b"png").unwrap();

        let layout_json = format!(
            r#"{{"groups": [{{"id": 1, "files": [{{"name": "photos", "path": "{}", "is_dir": true}}]}}]}}"#,
            photos.display()
        );
        let layout_path = temp.path().join("layout.json");
        std::fs::write(&layout_path, layout_json).unwrap();

        let out = temp.path().join("out");
        let options = ExportOptions {
            grid_cols: Some(2),
            hue: None,
            out: Some(out.clone()),
        };
        let source = SourceArgs {
            api_url: None,
            local: true,
        };

        handle(&layout_path, options, &source, &Config::default())
            .await
            .unwrap();

        let written: Vec<_> = std::fs::read_dir(&out).unwrap().collect();
        assert_eq!(written.len(), 1);
    }
}
