use async_trait::async_trait;
use directories::BaseDirs;
use genie_core::{Error, FileRef, Listing, Result};
use std::path::PathBuf;

use crate::handler::RemoteTree;

/// Remote tree backed by the local filesystem.
///
/// Lists folders the same way the HTTP backend does: folders first, then
/// files, each ordered by lowercased name. The listing path is canonical, so
/// a symlinked folder reports the folder it points at.
pub struct LocalTree;

#[async_trait]
impl RemoteTree for LocalTree {
    async fn list(&self, path: &str) -> Result<Listing> {
        let dir =
            std::path::absolute(expand_home(path)).map_err(|e| Error::listing(path, e))?;

        if !tokio::fs::try_exists(&dir).await.unwrap_or(false) {
            return Err(Error::listing(path, "Path not found"));
        }
        let dir = tokio::fs::canonicalize(&dir)
            .await
            .map_err(|e| Error::listing(path, e))?;

        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .map_err(|e| Error::listing(path, e))?;

        let mut items = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::listing(path, e))?
        {
            let entry_path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            let full_path = entry_path.display().to_string();

            // Follow symlinks; a dangling link is listed as a file
            let item = match tokio::fs::metadata(&entry_path).await {
                Ok(meta) if meta.is_dir() => FileRef::dir(name, full_path),
                Ok(meta) => FileRef::file(name, full_path).with_size(meta.len()),
                Err(_) => FileRef::file(name, full_path).with_size(0),
            };
            items.push(item);
        }

        items.sort_by_key(|item| (!item.is_dir, item.name.to_lowercase()));

        Ok(Listing {
            path: dir.display().to_string(),
            items,
        })
    }

    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let file = expand_home(path);
        match tokio::fs::metadata(&file).await {
            Ok(meta) if meta.is_file() => {}
            _ => return Err(Error::fetch(path, "File not found")),
        }

        tokio::fs::read(&file)
            .await
            .map_err(|e| Error::fetch(path, e))
    }
}

/// Expand a leading `~` to the user's home directory
fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };

    match BaseDirs::new() {
        Some(dirs) if rest.is_empty() => dirs.home_dir().to_path_buf(),
        Some(dirs) => dirs.home_dir().join(rest),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_orders_folders_first() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("b.TXT"), "b").unwrap();
        std::fs::write(temp.path().join("A.png"), "aa").unwrap();
        std::fs::create_dir(temp.path().join("zeta")).unwrap();
        std::fs::create_dir(temp.path().join("Alpha")).unwrap();

        let listing = LocalTree
            .list(&temp.path().display().to_string())
            .await
            .unwrap();

        let names: Vec<&str> = listing.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "zeta", "A.png", "b.TXT"]);

        assert_eq!(listing.items[0].extension, None);
        assert_eq!(listing.items[2].extension.as_deref(), Some(".png"));
        assert_eq!(listing.items[2].size, Some(2));
        assert_eq!(listing.items[3].extension.as_deref(), Some(".txt"));
        assert!(listing.items[3].path.ends_with("b.TXT"));
    }

    #[tokio::test]
    async fn test_list_missing_path() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("nope").display().to_string();

        let err = LocalTree.list(&missing).await.unwrap_err();
        assert!(matches!(err, Error::Listing { .. }));
    }

    #[tokio::test]
    async fn test_listing_path_is_canonical() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp.path().join("real")).unwrap();
        let dotted = temp.path().join("real").join("..").join("real");

        let listing = LocalTree.list(&dotted.display().to_string()).await.unwrap();
        let canonical = std::fs::canonicalize(temp.path().join("real")).unwrap();
        assert_eq!(listing.path, canonical.display().to_string());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlinked_folder_lists_its_target() {
        let temp = tempfile::tempdir().unwrap();
        let real = temp.path().join("real");
        std::fs::create_dir(&real).unwrap();
        std::fs::write(real.join("a.txt"), "a").unwrap();
        std::os::unix::fs::symlink(&real, temp.path().join("alias")).unwrap();

        let alias = temp.path().join("alias").display().to_string();
        let listing = LocalTree.list(&alias).await.unwrap();
        let canonical = std::fs::canonicalize(&real).unwrap();
        assert_eq!(listing.path, canonical.display().to_string());
        assert_eq!(listing.items[0].name, "a.txt");
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_home("~user/x"), PathBuf::from("~user/x"));
        if let Some(dirs) = BaseDirs::new() {
            assert_eq!(expand_home("~"), dirs.home_dir());
            assert_eq!(expand_home("~/pics"), dirs.home_dir().join("pics"));
        }
    }

    #[tokio::test]
    async fn test_fetch_reads_bytes() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("data.bin");
        std::fs::write(&file, [1u8, 2, 3]).unwrap();

        let bytes = LocalTree.fetch(&file.display().to_string()).await.unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);

        let err = LocalTree
            .fetch(&temp.path().display().to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
    }
}
