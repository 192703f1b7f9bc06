//! Core domain models and logic for genie
//!
//! This crate contains:
//! - Domain models (FileRef, Group, Layout, CleanFileRef, SnapshotArchive)
//! - Asset naming and extension classification
//! - Render engine (deterministic offline document generation)

pub mod error;
pub mod file;
pub mod group;
pub mod kind;
pub mod layout;
pub mod naming;
pub mod render;
pub mod snapshot;

pub use error::{Error, Result};
pub use file::{FileRef, Listing};
pub use group::{FlatGroup, Group};
pub use kind::AssetKind;
pub use layout::{Layout, LayoutConfig};
pub use naming::NameAllocator;
pub use render::RenderEngine;
pub use snapshot::{
    ASSETS_DIR, CleanFileRef, CleanGroup, DOCUMENT_NAME, ExportConfig, SnapshotArchive,
};
