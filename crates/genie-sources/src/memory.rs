use async_trait::async_trait;
use genie_core::{Error, FileRef, Listing, Result};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::handler::RemoteTree;

/// In-memory remote tree.
///
/// Children are listed in insertion order. Entries registered as broken are
/// listed by their parent but fail when listed or fetched themselves.
#[derive(Default)]
pub struct MemoryTree {
    dirs: HashMap<String, Vec<FileRef>>,
    files: HashMap<String, Vec<u8>>,
    links: HashMap<String, String>,
    fetched: Mutex<Vec<String>>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_dir(&mut self, path: &str) -> FileRef {
        let entry = FileRef::dir(file_name(path), path);
        self.dirs.entry(path.to_string()).or_default();
        self.attach(path, entry.clone());
        entry
    }

    pub fn insert_file(&mut self, path: &str, bytes: impl Into<Vec<u8>>) -> FileRef {
        let bytes = bytes.into();
        let entry = FileRef::file(file_name(path), path).with_size(bytes.len() as u64);
        self.files.insert(path.to_string(), bytes);
        self.attach(path, entry.clone());
        entry
    }

    /// A file that is listed but cannot be fetched
    pub fn insert_broken_file(&mut self, path: &str) -> FileRef {
        let entry = FileRef::file(file_name(path), path);
        self.attach(path, entry.clone());
        entry
    }

    /// A folder that is listed but cannot be listed itself
    pub fn insert_broken_dir(&mut self, path: &str) -> FileRef {
        let entry = FileRef::dir(file_name(path), path);
        self.attach(path, entry.clone());
        entry
    }

    /// A folder entry that lists as `target`, like a symlink
    pub fn insert_link(&mut self, path: &str, target: &str) -> FileRef {
        let entry = FileRef::dir(file_name(path), path);
        self.links.insert(path.to_string(), target.to_string());
        self.attach(path, entry.clone());
        entry
    }

    /// Paths fetched so far, in call order
    pub fn fetch_log(&self) -> Vec<String> {
        self.fetched
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    fn attach(&mut self, path: &str, entry: FileRef) {
        let Some(parent) = parent_of(path) else {
            return;
        };

        if !self.dirs.contains_key(parent) {
            self.insert_dir(parent);
        }
        if let Some(children) = self.dirs.get_mut(parent)
            && !children.iter().any(|c| c.path == entry.path)
        {
            children.push(entry);
        }
    }
}

#[async_trait]
impl RemoteTree for MemoryTree {
    async fn list(&self, path: &str) -> Result<Listing> {
        let resolved = self.links.get(path).map_or(path, String::as_str);
        let items = self
            .dirs
            .get(resolved)
            .cloned()
            .ok_or_else(|| Error::listing(path, "Path not found"))?;

        Ok(Listing {
            path: resolved.to_string(),
            items,
        })
    }

    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        if let Ok(mut log) = self.fetched.lock() {
            log.push(path.to_string());
        }

        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::fetch(path, "File not found"))
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn parent_of(path: &str) -> Option<&str> {
    let (parent, _) = path.rsplit_once('/')?;
    (!parent.is_empty()).then_some(parent)
}
