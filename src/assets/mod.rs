//! Asset storage collaborators and the import-time ingestor.
//!
//! The authoritative blob store lives outside this crate; [`AssetStore`] is
//! the seam. [`AssetIngestor`] adds the import-run policy on top: per-run
//! deduplication by source object identity and skip-and-continue on
//! persistence failure.

mod fs_store;

pub use fs_store::FsAssetStore;

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::Result;

/// External blob store: persists bytes, resolves ids to local paths.
pub trait AssetStore {
    /// Persist raw bytes and register an asset record for `owner` (the
    /// tenant performing the import). Returns the opaque asset id.
    fn put(&self, data: &[u8], filename: &str, owner: &str) -> Result<String>;

    /// Resolve an asset id to a readable local path, if the asset exists.
    fn resolve(&self, asset_id: &str) -> Option<PathBuf>;
}

/// Resolve-only view of a store, what the exporter needs.
pub trait AssetResolver {
    fn resolve_path(&self, asset_id: &str) -> Option<PathBuf>;
}

/// Adapter so a plain closure can act as the exporter's resolver.
pub struct FnResolver<F>(pub F)
where
    F: Fn(&str) -> Option<PathBuf>;

impl<F> AssetResolver for FnResolver<F>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    fn resolve_path(&self, asset_id: &str) -> Option<PathBuf> {
        (self.0)(asset_id)
    }
}

/// Import-run asset ingestor.
///
/// Owns the "seen object ids" cache for exactly one import invocation:
/// the same source image object referenced anywhere in the run is persisted
/// once and its id reused. This is identity-based, not content-based —
/// identical pixels under two different object ids are stored twice.
pub struct AssetIngestor<'a, S: AssetStore> {
    store: &'a S,
    owner: String,
    by_object: HashMap<u64, String>,
    created: Vec<String>,
}

impl<'a, S: AssetStore> AssetIngestor<'a, S> {
    pub fn new(store: &'a S, owner: impl Into<String>) -> Self {
        Self {
            store,
            owner: owner.into(),
            by_object: HashMap::new(),
            created: Vec::new(),
        }
    }

    /// Persist bytes with no source identity (page rasters). Always stores.
    pub fn ingest(&mut self, data: &[u8], filename: &str) -> Result<String> {
        let id = self.store.put(data, filename, &self.owner)?;
        self.created.push(id.clone());
        Ok(id)
    }

    /// Persist bytes for a source object, deduplicating by `object_id`
    /// within this run.
    pub fn ingest_object(&mut self, object_id: u64, data: &[u8], filename: &str) -> Result<String> {
        if let Some(id) = self.by_object.get(&object_id) {
            return Ok(id.clone());
        }
        let id = self.ingest(data, filename)?;
        self.by_object.insert(object_id, id.clone());
        Ok(id)
    }

    /// Id previously assigned to a source object in this run, if any.
    pub fn cached(&self, object_id: u64) -> Option<&str> {
        self.by_object.get(&object_id).map(String::as_str)
    }

    /// All asset ids created by this run, in creation order.
    pub fn created_assets(&self) -> &[String] {
        &self.created
    }

    /// Consume the ingestor, yielding the created ids.
    pub fn into_created(self) -> Vec<String> {
        self.created
    }
}
