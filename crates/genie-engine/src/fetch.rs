//! Per-file asset fetching with failure isolation

use genie_core::{CleanFileRef, FileRef, NameAllocator};
use genie_sources::RemoteTree;
use tracing::warn;

use crate::package::Asset;

/// Outcome of fetching one file
#[derive(Debug)]
pub struct Fetched {
    pub descriptor: CleanFileRef,
    /// `None` when the fetch failed
    pub asset: Option<Asset>,
    pub failure: Option<String>,
}

/// Fetches files one at a time, naming each asset as it goes
pub struct AssetFetcher<'a> {
    tree: &'a dyn RemoteTree,
    names: NameAllocator,
}

impl<'a> AssetFetcher<'a> {
    pub fn new(tree: &'a dyn RemoteTree) -> Self {
        Self {
            tree,
            names: NameAllocator::new(),
        }
    }

    /// Fetch one file. Never fails: errors are recorded on the descriptor.
    pub async fn fetch(&mut self, file: &FileRef) -> Fetched {
        let safe_name = self.names.allocate(file);

        match self.tree.fetch(&file.path).await {
            Ok(bytes) => Fetched {
                descriptor: CleanFileRef::fetched(file, safe_name.clone()),
                asset: Some(Asset { safe_name, bytes }),
                failure: None,
            },
            Err(e) => {
                warn!("Failed to export {}: {}", file.name, e);
                Fetched {
                    descriptor: CleanFileRef::failed(file, safe_name),
                    asset: None,
                    failure: Some(e.to_string()),
                }
            }
        }
    }
}
