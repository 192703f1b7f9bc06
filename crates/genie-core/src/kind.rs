//! Extension to presentation mapping

use serde::{Deserialize, Serialize};

const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".webp", ".svg"];
const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mov", ".webm", ".mkv"];
const MESH_EXTENSIONS: &[&str] = &[".glb", ".gltf"];
const BINARY_EXTENSIONS: &[&str] = &[".zip", ".exe", ".bin"];

/// How a file is presented in the offline document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Image,
    Video,
    Mesh,
    /// Best-effort preview in an inline frame
    Embed,
    /// No preview; placeholder only
    Binary,
}

impl AssetKind {
    /// Classify a lowercased, dot-prefixed extension (empty if none)
    pub fn classify(extension: &str) -> Self {
        let ext = extension.to_lowercase();
        let ext = ext.as_str();

        if IMAGE_EXTENSIONS.contains(&ext) {
            Self::Image
        } else if VIDEO_EXTENSIONS.contains(&ext) {
            Self::Video
        } else if MESH_EXTENSIONS.contains(&ext) {
            Self::Mesh
        } else if ext.is_empty() || BINARY_EXTENSIONS.contains(&ext) {
            Self::Binary
        } else {
            Self::Embed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_classes() {
        assert_eq!(AssetKind::classify(".png"), AssetKind::Image);
        assert_eq!(AssetKind::classify(".SVG"), AssetKind::Image);
        assert_eq!(AssetKind::classify(".mkv"), AssetKind::Video);
        assert_eq!(AssetKind::classify(".gltf"), AssetKind::Mesh);
    }

    #[test]
    fn test_embed_and_binary() {
        assert_eq!(AssetKind::classify(".py"), AssetKind::Embed);
        assert_eq!(AssetKind::classify(".csv"), AssetKind::Embed);
        assert_eq!(AssetKind::classify(".zip"), AssetKind::Binary);
        assert_eq!(AssetKind::classify(".exe"), AssetKind::Binary);
        assert_eq!(AssetKind::classify(""), AssetKind::Binary);
    }
}
