//! Read-only, indexed load store
//!
//! The store is built once at startup and never mutated afterwards, so it can
//! be shared across request handlers behind an `Arc` without locking. Lookups
//! go through an identifier index that records positions in load order, which
//! keeps duplicate identifiers in their original relative order.

use crate::error::{LoadboardError, Result};
use crate::types::Load;
use ahash::AHashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// In-memory load dataset with an exact-match identifier index
#[derive(Debug, Default)]
pub struct LoadStore {
    /// Records in file order
    loads: Vec<Load>,
    /// `load_id` -> ascending positions into `loads`
    index: AHashMap<String, Vec<usize>>,
}

impl LoadStore {
    /// Create an empty store
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a store from records already in memory
    pub fn from_loads(loads: Vec<Load>) -> Self {
        let mut index: AHashMap<String, Vec<usize>> = AHashMap::with_capacity(loads.len());
        for (pos, load) in loads.iter().enumerate() {
            index.entry(load.load_id.clone()).or_default().push(pos);
        }

        LoadStore { loads, index }
    }

    /// Read a JSON array of loads from `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading dataset");

        let raw = fs::read(path).map_err(|source| LoadboardError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let loads: Vec<Load> =
            serde_json::from_slice(&raw).map_err(|source| LoadboardError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let store = Self::from_loads(loads);
        store.log_summary(path);
        Ok(store)
    }

    /// Read the dataset, falling back to an empty store on any error.
    ///
    /// The failure is logged and startup continues; lookups return nothing
    /// until the file is fixed and the process restarted.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(store) => store,
            Err(e) => {
                error!(
                    path = %path.display(),
                    error = %e,
                    "Dataset unavailable, serving an empty store"
                );
                Self::empty()
            }
        }
    }

    /// All records whose `load_id` equals `id`, in load order
    pub fn find_by_id(&self, id: &str) -> Vec<&Load> {
        self.index
            .get(id)
            .map(|positions| positions.iter().map(|&pos| &self.loads[pos]).collect())
            .unwrap_or_default()
    }

    /// Owned copies of [`find_by_id`](Self::find_by_id) results, ready to serialize
    pub fn find_by_id_cloned(&self, id: &str) -> Vec<Load> {
        self.find_by_id(id).into_iter().cloned().collect()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Number of distinct identifiers
    pub fn distinct_ids(&self) -> usize {
        self.index.len()
    }

    /// Identifiers that occur more than once, in order of first appearance
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut dupes: Vec<(usize, &str)> = self
            .index
            .iter()
            .filter(|(_, positions)| positions.len() > 1)
            .map(|(id, positions)| (positions[0], id.as_str()))
            .collect();
        dupes.sort_unstable_by_key(|(first, _)| *first);
        dupes.into_iter().map(|(_, id)| id).collect()
    }

    /// Iterate over all records in load order
    pub fn iter(&self) -> impl Iterator<Item = &Load> {
        self.loads.iter()
    }

    fn log_summary(&self, path: &Path) {
        info!(
            path = %path.display(),
            records = self.len(),
            distinct_ids = self.distinct_ids(),
            "Loaded dataset"
        );

        let dupes = self.duplicate_ids();
        if !dupes.is_empty() {
            warn!(
                count = dupes.len(),
                ids = ?dupes,
                "Duplicate load_id values found; lookups return every match"
            );
        }
    }
}
