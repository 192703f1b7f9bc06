//! Collision-free asset names for one export run

use std::collections::HashSet;
use time::OffsetDateTime;

use crate::file::FileRef;

/// Allocates archive-relative asset names.
///
/// Names combine a millisecond timestamp, a random token and the sanitized
/// original name. Every issued name is remembered so a name is never handed
/// out twice by the same allocator, even for identical originals.
#[derive(Debug, Default)]
pub struct NameAllocator {
    issued: HashSet<String>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, file: &FileRef) -> String {
        let base = sanitize(&file.name);
        loop {
            let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
            let token = uuid::Uuid::new_v4().simple().to_string();
            let name = format!("{}_{}_{}", millis, &token[..8], base);
            if self.issued.insert(name.clone()) {
                return name;
            }
        }
    }

    /// Number of names issued so far
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}

/// Keep ASCII letters, digits and dots; everything else becomes `_`
pub fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}
