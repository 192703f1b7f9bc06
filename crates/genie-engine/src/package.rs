//! Archive packaging
//!
//! The archive layout is fixed: the document at the root and every fetched
//! asset, flat, under `assets/`. The document's relative references depend
//! on this layout.

use genie_core::{ASSETS_DIR, DOCUMENT_NAME, Error, Result};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Fetched bytes stored under an allocated name
#[derive(Debug, Clone)]
pub struct Asset {
    pub safe_name: String,
    pub bytes: Vec<u8>,
}

pub struct Packager;

impl Packager {
    /// Write the document and all assets into an in-memory zip archive
    pub fn package(document: &str, assets: &[Asset]) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        zip.start_file(DOCUMENT_NAME, options).map_err(archive_error)?;
        zip.write_all(document.as_bytes()).map_err(archive_error)?;

        for asset in assets {
            let large = asset.bytes.len() as u64 >= u32::MAX as u64;
            zip.start_file(
                format!("{}/{}", ASSETS_DIR, asset.safe_name),
                options.large_file(large),
            )
            .map_err(archive_error)?;
            zip.write_all(&asset.bytes).map_err(archive_error)?;
        }

        let cursor = zip.finish().map_err(archive_error)?;
        Ok(cursor.into_inner())
    }

    /// Download name for an archive created at `at`
    pub fn archive_filename(at: OffsetDateTime) -> String {
        format!(
            "visual_genie_snapshot_{:04}-{:02}-{:02}-{:02}{:02}.zip",
            at.year(),
            u8::from(at.month()),
            at.day(),
            at.hour(),
            at.minute()
        )
    }
}

/// Write an archive into `dir` under its own filename
pub async fn save_archive(bytes: &[u8], filename: &str, dir: &Path) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(filename);
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

fn archive_error(e: impl std::fmt::Display) -> Error {
    Error::Archive(e.to_string())
}
