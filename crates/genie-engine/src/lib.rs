//! Snapshot export pipeline
//!
//! Flatten every group, fetch each file strictly in order, render the offline
//! document and package everything into one archive. Listing and fetch
//! failures are contained per subtree and per file; only packaging (or
//! invalid input) fails the whole export.

pub mod fetch;
pub mod package;
pub mod progress;
pub mod queue;

use std::sync::Arc;

use genie_core::{Error, ExportConfig, Group, Layout, RenderEngine, Result, SnapshotArchive};
use genie_sources::{Flattener, RemoteTree, flatten::DEFAULT_MAX_DEPTH};
use time::OffsetDateTime;
use tokio::sync::mpsc::UnboundedSender;
use tracing::info;

pub use fetch::AssetFetcher;
pub use package::{Asset, Packager, save_archive};
pub use progress::ExportEvent;
pub use queue::{FetchQueue, FetchReport};

use progress::Progress;

pub struct Exporter {
    tree: Arc<dyn RemoteTree>,
    render_engine: RenderEngine,
    max_depth: usize,
    progress: Progress,
}

impl Exporter {
    pub fn new(tree: Arc<dyn RemoteTree>) -> Self {
        Self {
            tree,
            render_engine: RenderEngine::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            progress: Progress::default(),
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_progress(mut self, sender: UnboundedSender<ExportEvent>) -> Self {
        self.progress = Progress::new(Some(sender));
        self
    }

    pub fn with_render_engine(mut self, render_engine: RenderEngine) -> Self {
        self.render_engine = render_engine;
        self
    }

    /// Export a saved layout
    pub async fn export_layout(&self, layout: Layout) -> Result<SnapshotArchive> {
        let config = layout.export_config()?;
        self.export(layout.groups, config).await
    }

    /// Export `groups` as they are at call time.
    ///
    /// Returns an error only for whole-operation failures; files that could
    /// not be listed or fetched show up as gaps in the snapshot instead.
    pub async fn export_snapshot(
        &self,
        groups: Vec<Group>,
        grid_cols: u32,
        hue: i64,
    ) -> Result<SnapshotArchive> {
        let config = ExportConfig::new(grid_cols, hue)?;
        self.export(groups, config).await
    }

    async fn export(&self, groups: Vec<Group>, config: ExportConfig) -> Result<SnapshotArchive> {
        info!("Pre-processing: scanning directories...");

        // 1. Flatten folders into concrete files
        let flattener = Flattener::new(self.tree.as_ref()).with_max_depth(self.max_depth);
        let mut flat_groups = Vec::with_capacity(groups.len());
        for group in &groups {
            for folder in group.files.iter().filter(|f| f.is_dir) {
                self.progress.emit(ExportEvent::Crawling {
                    path: folder.path.clone(),
                });
            }
            flat_groups.push(flattener.flatten_group(group).await);
        }

        // 2. Enqueue every file, then drain one at a time
        let queue = FetchQueue::from_groups(&flat_groups);
        let total = queue.total();
        info!("Starting download of {} files...", total);
        self.progress.emit(ExportEvent::Flattened { total });

        let mut fetcher = AssetFetcher::new(self.tree.as_ref());
        let report = queue.drain(&mut fetcher, &self.progress).await;

        // 3. Render and package
        info!("Generating archive...");
        self.progress.emit(ExportEvent::Packaging);

        let created_at = OffsetDateTime::now_utc();
        let document = self
            .render_engine
            .render(&report.groups, &config, created_at.date());

        let asset_count = report.assets.len();
        let failed_count = report.failed;
        let assets = report.assets;
        let bytes = tokio::task::spawn_blocking(move || Packager::package(&document, &assets))
            .await
            .map_err(|e| Error::Archive(format!("packaging task failed: {}", e)))??;

        info!(
            "Export complete: {} assets, {} failed",
            asset_count, failed_count
        );
        self.progress.emit(ExportEvent::Finished {
            assets: asset_count,
            failed: failed_count,
        });

        Ok(SnapshotArchive {
            filename: Packager::archive_filename(created_at),
            bytes,
            groups: report.groups,
            asset_count,
            failed_count,
            created_at,
        })
    }
}
