//! Single-consumer fetch queue
//!
//! Every flattened file is enqueued up front, then drained strictly one at a
//! time in group order, so fetch order always matches display order.

use genie_core::{CleanGroup, FileRef, FlatGroup};
use std::collections::VecDeque;
use tracing::info;

use crate::fetch::AssetFetcher;
use crate::package::Asset;
use crate::progress::{ExportEvent, Progress};

#[derive(Debug, Clone)]
pub struct QueuedFile {
    pub group_index: usize,
    pub file: FileRef,
}

/// Result of draining the queue
#[derive(Debug, Default)]
pub struct FetchReport {
    pub groups: Vec<CleanGroup>,
    pub assets: Vec<Asset>,
    pub failed: usize,
}

pub struct FetchQueue {
    pending: VecDeque<QueuedFile>,
    group_ids: Vec<u64>,
    total: usize,
}

impl FetchQueue {
    pub fn from_groups(groups: &[FlatGroup]) -> Self {
        let pending: VecDeque<QueuedFile> = groups
            .iter()
            .enumerate()
            .flat_map(|(group_index, group)| {
                group.files.iter().map(move |file| QueuedFile {
                    group_index,
                    file: file.clone(),
                })
            })
            .collect();

        Self {
            total: pending.len(),
            group_ids: groups.iter().map(|g| g.id).collect(),
            pending,
        }
    }

    /// Files enqueued in total
    pub fn total(&self) -> usize {
        self.total
    }

    /// Files still waiting
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pop(&mut self) -> Option<QueuedFile> {
        self.pending.pop_front()
    }

    pub(crate) async fn drain(
        mut self,
        fetcher: &mut AssetFetcher<'_>,
        progress: &Progress,
    ) -> FetchReport {
        let mut report = FetchReport {
            groups: self
                .group_ids
                .iter()
                .map(|&id| CleanGroup {
                    id,
                    files: Vec::new(),
                })
                .collect(),
            ..Default::default()
        };

        let total = self.total;
        let mut index = 0;
        while let Some(queued) = self.pop() {
            index += 1;
            info!("[{}/{}] Downloading: {}", index, total, queued.file.name);
            progress.emit(ExportEvent::Downloading {
                index,
                total,
                name: queued.file.name.clone(),
            });

            let fetched = fetcher.fetch(&queued.file).await;
            match fetched.asset {
                Some(asset) => report.assets.push(asset),
                None => {
                    report.failed += 1;
                    progress.emit(ExportEvent::Failed {
                        name: queued.file.name.clone(),
                        reason: fetched.failure.unwrap_or_default(),
                    });
                }
            }
            report.groups[queued.group_index]
                .files
                .push(fetched.descriptor);
        }

        report
    }
}
