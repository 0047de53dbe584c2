//! Filesystem-backed asset store.
//!
//! Blobs live flat under a root directory keyed by an opaque uuid-based id;
//! a JSON sidecar carries the asset record (original filename, owner). The
//! same id works on disk and in the record so every pipeline resolves assets
//! the same way.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AssetResolver, AssetStore};
use crate::error::{Error, Result};

/// Asset record stored next to each blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AssetRecord {
    filename: String,
    owner: String,
}

/// A local directory acting as the blob store.
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, asset_id: &str) -> PathBuf {
        self.root.join(asset_id)
    }

    fn record_path(&self, asset_id: &str) -> PathBuf {
        self.root.join(format!("{asset_id}.meta.json"))
    }

    /// Read back the record for an asset, if present.
    pub fn owner_of(&self, asset_id: &str) -> Option<String> {
        let raw = fs::read(self.record_path(asset_id)).ok()?;
        let record: AssetRecord = serde_json::from_slice(&raw).ok()?;
        Some(record.owner)
    }
}

impl AssetStore for FsAssetStore {
    fn put(&self, data: &[u8], filename: &str, owner: &str) -> Result<String> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin");
        let asset_id = format!("{}.{ext}", Uuid::new_v4());

        fs::write(self.blob_path(&asset_id), data)
            .map_err(|e| Error::AssetStore(format!("write {asset_id}: {e}")))?;

        let record = AssetRecord {
            filename: filename.to_string(),
            owner: owner.to_string(),
        };
        fs::write(
            self.record_path(&asset_id),
            serde_json::to_vec(&record)?,
        )
        .map_err(|e| Error::AssetStore(format!("record {asset_id}: {e}")))?;

        Ok(asset_id)
    }

    fn resolve(&self, asset_id: &str) -> Option<PathBuf> {
        let path = self.blob_path(asset_id);
        path.is_file().then_some(path)
    }
}

impl AssetResolver for FsAssetStore {
    fn resolve_path(&self, asset_id: &str) -> Option<PathBuf> {
        self.resolve(asset_id)
    }
}
