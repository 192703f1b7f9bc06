//! Remote tree trait

use async_trait::async_trait;
use genie_core::{Listing, Result};
use std::sync::Arc;

/// The directory-listing and file-fetch service a snapshot is exported from.
///
/// Both operations address entries by the same absolute `path`.
#[async_trait]
pub trait RemoteTree: Send + Sync {
    /// List the immediate children of a folder
    async fn list(&self, path: &str) -> Result<Listing>;

    /// Retrieve the raw bytes of a file
    async fn fetch(&self, path: &str) -> Result<Vec<u8>>;
}

#[async_trait]
impl<T: RemoteTree + ?Sized> RemoteTree for Arc<T> {
    async fn list(&self, path: &str) -> Result<Listing> {
        (**self).list(path).await
    }

    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        (**self).fetch(path).await
    }
}
