//! File references produced by the listing service

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A file or folder as reported by the listing service.
///
/// `path` is the absolute identifier used for both listing and fetching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    pub is_dir: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl FileRef {
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        let name = name.into();
        let extension = extension_of(&name);
        Self {
            name,
            path: path.into(),
            extension: (!extension.is_empty()).then_some(extension),
            is_dir: false,
            size: None,
        }
    }

    pub fn dir(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            extension: None,
            is_dir: true,
            size: Some(0),
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Lowercased extension with a leading dot, or an empty string.
    ///
    /// Falls back to the file name when the listing did not report one.
    pub fn normalized_extension(&self) -> String {
        match self.extension.as_deref() {
            Some(ext) if !ext.is_empty() => {
                let ext = ext.to_lowercase();
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{}", ext)
                }
            }
            _ => extension_of(&self.name),
        }
    }
}

/// Result of listing one folder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub path: String,
    #[serde(default)]
    pub items: Vec<FileRef>,
}

fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}
