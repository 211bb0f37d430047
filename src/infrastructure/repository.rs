use crate::domain::{STORAGE_KEY, SavedDateSet, StoredBlob};
use crate::infrastructure::KeyValueStore;
use anyhow::{Context, Result};
use chrono::Utc;
use std::cmp::Reverse;

/// Whether an upsert added a new record or replaced one with the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// Saved date sets, kept as one JSON array under [`STORAGE_KEY`].
///
/// Every write rewrites the whole collection. There is no locking; one caller
/// at a time is assumed.
pub struct SavedSetRepository {
    store: Box<dyn KeyValueStore>,
}

impl SavedSetRepository {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read every saved set.
    ///
    /// Unreadable stored data is logged and treated as an empty collection.
    /// The single-record format is upgraded in memory only; storage is left
    /// untouched until the next write.
    pub fn load_all(&self) -> Result<Vec<SavedDateSet>> {
        let Some(raw) = self.store.get(STORAGE_KEY)? else {
            return Ok(Vec::new());
        };

        match StoredBlob::parse(&raw) {
            Ok(blob) => Ok(blob.into_sets(Utc::now())),
            Err(e) => {
                log::error!("Failed to load saved date sets: {e}");
                Ok(Vec::new())
            }
        }
    }

    pub fn find(&self, id: &str) -> Result<Option<SavedDateSet>> {
        Ok(self.load_all()?.into_iter().find(|set| set.id == id))
    }

    /// Replace the record with the same id in place, or append a new one.
    pub fn upsert(&self, set: SavedDateSet) -> Result<UpsertOutcome> {
        let mut sets = self.load_all()?;

        let outcome = match sets.iter().position(|existing| existing.id == set.id) {
            Some(index) => {
                sets[index] = set;
                UpsertOutcome::Updated
            }
            None => {
                sets.push(set);
                UpsertOutcome::Inserted
            }
        };

        self.write_all(&sets)?;
        log::debug!("Upserted saved date set ({outcome:?}), {} stored", sets.len());
        Ok(outcome)
    }

    /// Remove the record with `id`. Returns whether one was removed; the
    /// collection is written back either way.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut sets = self.load_all()?;
        let before = sets.len();
        sets.retain(|set| set.id != id);

        self.write_all(&sets)?;
        Ok(sets.len() < before)
    }

    /// Saved sets, most recently saved first. Sets with an unreadable
    /// timestamp come last.
    pub fn list_sorted_by_recency(&self) -> Result<Vec<SavedDateSet>> {
        let mut sets = self.load_all()?;
        sets.sort_by_cached_key(|set| Reverse(set.saved_at_time()));
        Ok(sets)
    }

    fn write_all(&self, sets: &[SavedDateSet]) -> Result<()> {
        let blob = serde_json::to_string(sets).context("Failed to serialize saved date sets")?;
        self.store
            .set(STORAGE_KEY, &blob)
            .context("Failed to write saved date sets")
    }
}
