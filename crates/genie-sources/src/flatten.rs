//! Directory flattening
//!
//! Folders are expanded depth-first in listing order with an explicit work
//! stack. Every listing call is its own failure domain: a folder that cannot
//! be listed contributes no files and its siblings carry on.

use genie_core::{FileRef, FlatGroup, Group, Listing};
use tracing::{debug, info, warn};

use crate::handler::RemoteTree;

/// Nested listings allowed below a top-level folder before a branch is cut
pub const DEFAULT_MAX_DEPTH: usize = 64;

pub struct Flattener<'a> {
    tree: &'a dyn RemoteTree,
    max_depth: usize,
}

impl<'a> Flattener<'a> {
    pub fn new(tree: &'a dyn RemoteTree) -> Self {
        Self {
            tree,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Resolve a folder into the concrete files beneath it
    ///
    /// A folder whose listing resolves to one of its own ancestors is
    /// skipped, so link cycles end after one extra listing.
    pub async fn flatten(&self, folder_path: &str) -> Vec<FileRef> {
        let mut files = Vec::new();
        let mut stack: Vec<std::vec::IntoIter<FileRef>> = Vec::new();
        // Listing paths of the folders open on `stack`, outermost first
        let mut ancestors: Vec<String> = Vec::new();

        if self.max_depth == 0 {
            warn!("Depth limit reached, skipping {}", folder_path);
            return files;
        }
        match self.list(folder_path).await {
            Some(listing) => {
                ancestors.push(listing.path);
                stack.push(listing.items.into_iter());
            }
            None => return files,
        }

        loop {
            let next = match stack.last_mut() {
                Some(level) => level.next(),
                None => break,
            };
            let Some(item) = next else {
                stack.pop();
                ancestors.pop();
                continue;
            };

            if !item.is_dir {
                files.push(item);
                continue;
            }

            if stack.len() >= self.max_depth {
                warn!("Depth limit reached, skipping {}", item.path);
                continue;
            }
            let Some(listing) = self.list(&item.path).await else {
                continue;
            };
            if ancestors.contains(&listing.path) {
                warn!(
                    "Folder cycle detected, skipping {} (resolves to {})",
                    item.path, listing.path
                );
                continue;
            }
            ancestors.push(listing.path);
            stack.push(listing.items.into_iter());
        }

        files
    }

    /// Replace every folder in the group, in place, by its resolved files
    pub async fn flatten_group(&self, group: &Group) -> FlatGroup {
        let mut files = Vec::with_capacity(group.files.len());

        for file in &group.files {
            if file.is_dir {
                info!("Crawling directory: {}", file.name);
                files.extend(self.flatten(&file.path).await);
            } else {
                files.push(file.clone());
            }
        }

        FlatGroup::new(group.id, files)
    }

    pub async fn flatten_groups(&self, groups: &[Group]) -> Vec<FlatGroup> {
        let mut flat = Vec::with_capacity(groups.len());
        for group in groups {
            flat.push(self.flatten_group(group).await);
        }
        flat
    }

    async fn list(&self, path: &str) -> Option<Listing> {
        match self.tree.list(path).await {
            Ok(listing) => {
                debug!("Listed {} ({} items)", path, listing.items.len());
                Some(listing)
            }
            Err(e) => {
                warn!("Error crawling folder {}: {}", path, e);
                None
            }
        }
    }
}
