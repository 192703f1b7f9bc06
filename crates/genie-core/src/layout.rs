//! Layout input: the arrangement a snapshot is exported from

use serde::{Deserialize, Serialize};

use crate::group::Group;
use crate::snapshot::ExportConfig;
use crate::Result;

pub const DEFAULT_GRID_COLS: u32 = 1;
pub const DEFAULT_HUE: i64 = 180;

/// Groups plus global display settings, in the shape the live session persists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub groups: Vec<Group>,
    #[serde(default)]
    pub config: LayoutConfig,
}

/// Display settings saved with a layout; absent values fall back to defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(rename = "gridCols", default, skip_serializing_if = "Option::is_none")]
    pub grid_cols: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue: Option<i64>,
}

impl Layout {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn export_config(&self) -> Result<ExportConfig> {
        ExportConfig::new(
            self.config.grid_cols.unwrap_or(DEFAULT_GRID_COLS),
            self.config.hue.unwrap_or(DEFAULT_HUE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_state() {
        let json = r#"{
            "groups": [
                {"id": 1, "files": [], "refreshKey": 0},
                {"id": 2, "files": [{"name": "docs", "path": "/srv/docs", "is_dir": true, "size": 0}]}
            ],
            "config": {"gridCols": 3, "hue": 300}
        }"#;

        let layout = Layout::from_json(json).unwrap();
        assert_eq!(layout.groups.len(), 2);
        assert!(layout.groups[1].files[0].is_dir);
        assert_eq!(layout.config.grid_cols, Some(3));

        let config = layout.export_config().unwrap();
        assert_eq!(config.grid_cols, 3);
        assert_eq!(config.neon_color, "hsl(300, 100%, 50%)");
    }

    #[test]
    fn test_config_defaults_when_missing() {
        let layout = Layout::from_json(r#"{"groups": []}"#).unwrap();
        assert_eq!(layout.config.grid_cols, None);

        let config = layout.export_config().unwrap();
        assert_eq!(config.grid_cols, DEFAULT_GRID_COLS);
        assert_eq!(config.neon_color, "hsl(180, 100%, 50%)");
    }
}
