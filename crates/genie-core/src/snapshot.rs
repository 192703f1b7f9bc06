//! Snapshot domain model

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::file::FileRef;
use crate::{Error, Result};

/// Global display settings embedded in the exported document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(rename = "gridCols")]
    pub grid_cols: u32,
    #[serde(rename = "neonColor")]
    pub neon_color: String,
}

impl ExportConfig {
    /// Build from a column count and a hue in degrees (normalized into `[0, 360)`).
    pub fn new(grid_cols: u32, hue: i64) -> Result<Self> {
        if grid_cols == 0 {
            return Err(Error::InvalidConfig(
                "grid columns must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            grid_cols,
            neon_color: format!("hsl({}, 100%, 50%)", hue.rem_euclid(360)),
        })
    }
}

/// Per-file descriptor produced during export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanFileRef {
    pub name: String,
    pub extension: String,
    pub is_dir: bool,
    #[serde(rename = "safeName")]
    pub safe_name: String,
    pub path: String,
    /// Fetch failed; no asset exists under `safe_name`
    pub error: bool,
}

impl CleanFileRef {
    pub fn fetched(file: &FileRef, safe_name: String) -> Self {
        Self::from_ref(file, safe_name, false)
    }

    pub fn failed(file: &FileRef, safe_name: String) -> Self {
        Self::from_ref(file, safe_name, true)
    }

    fn from_ref(file: &FileRef, safe_name: String, error: bool) -> Self {
        Self {
            name: file.name.clone(),
            extension: file.normalized_extension(),
            is_dir: false,
            safe_name,
            path: file.path.clone(),
            error,
        }
    }

    /// Archive-relative location of this file's bytes
    pub fn asset_path(&self) -> String {
        format!("{}/{}", ASSETS_DIR, self.safe_name)
    }
}

/// A group after export: cleaned descriptors in display order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanGroup {
    pub id: u64,
    pub files: Vec<CleanFileRef>,
}

/// Directory holding every asset inside the archive
pub const ASSETS_DIR: &str = "assets";

/// Entry point document inside the archive
pub const DOCUMENT_NAME: &str = "index.html";

/// The packaged, downloadable snapshot
#[derive(Debug, Clone)]
pub struct SnapshotArchive {
    pub filename: String,
    pub bytes: Vec<u8>,
    /// Descriptors the document was rendered from
    pub groups: Vec<CleanGroup>,
    pub asset_count: usize,
    pub failed_count: usize,
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_config_rejects_zero_columns() {
        let err = ExportConfig::new(0, 180).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_export_config_normalizes_hue() {
        assert_eq!(
            ExportConfig::new(2, 400).unwrap().neon_color,
            "hsl(40, 100%, 50%)"
        );
        assert_eq!(
            ExportConfig::new(2, -30).unwrap().neon_color,
            "hsl(330, 100%, 50%)"
        );
    }

    #[test]
    fn test_clean_file_ref_serializes_camel_case() {
        let file = FileRef::file("a b.png", "/x/a b.png");
        let clean = CleanFileRef::failed(&file, "1_abc_a_b.png".to_string());

        let json = serde_json::to_value(&clean).unwrap();
        assert_eq!(json["safeName"], "1_abc_a_b.png");
        assert_eq!(json["error"], true);
        assert_eq!(json["is_dir"], false);
        assert_eq!(clean.asset_path(), "assets/1_abc_a_b.png");
    }
}
