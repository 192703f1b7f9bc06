//! Groups of file references, as arranged by the user

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

use crate::file::FileRef;

static LAST_GROUP_ID: AtomicU64 = AtomicU64::new(0);

/// An ordered collection of file/folder references shown as one column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: u64,
    #[serde(default)]
    pub files: Vec<FileRef>,
    #[serde(rename = "refreshKey", default)]
    pub refresh_key: u64,
}

impl Group {
    pub fn new(files: Vec<FileRef>) -> Self {
        Self {
            id: next_group_id(),
            files,
            refresh_key: 0,
        }
    }
}

/// A group whose folders have been replaced by their concrete files
#[derive(Debug, Clone, Serialize)]
pub struct FlatGroup {
    pub id: u64,
    pub files: Vec<FileRef>,
}

impl FlatGroup {
    pub fn new(id: u64, files: Vec<FileRef>) -> Self {
        debug_assert!(files.iter().all(|f| !f.is_dir));
        Self { id, files }
    }
}

/// Creation-time millisecond timestamp, bumped when two groups are created
/// within the same millisecond.
fn next_group_id() -> u64 {
    let now = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64;
    let mut last = LAST_GROUP_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_GROUP_ID.compare_exchange_weak(
            last,
            candidate,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}
