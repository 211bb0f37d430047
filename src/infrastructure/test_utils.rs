/// Test utilities for repository and application tests
///
/// `MemoryStore` stands in for real storage so tests can seed raw blobs
/// (including corrupt and legacy ones) and inspect exactly what was written.
///
/// ```rust
/// use crate::infrastructure::test_utils::test_harness::TestRepository;
///
/// #[test]
/// fn my_test() {
///     let harness = TestRepository::new();
///     harness.seed("[]");
///     // Use harness.repository() ...
/// }
/// ```
#[cfg(test)]
pub mod test_harness {
    use crate::domain::{DateWindow, STORAGE_KEY, SavedDateSet};
    use crate::infrastructure::{KeyValueStore, SavedSetRepository};
    use anyhow::Result;
    use chrono::{DateTime, TimeZone, Utc};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory store; clones share the same map.
    #[derive(Clone, Default)]
    pub struct MemoryStore {
        values: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.raw(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn backend_info(&self) -> &str {
            "Memory Storage Backend"
        }
    }

    /// Store that refuses every write, like a browser over its storage quota.
    pub struct FullStore;

    impl KeyValueStore for FullStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            anyhow::bail!("storage quota exceeded")
        }

        fn backend_info(&self) -> &str {
            "Full Storage Backend"
        }
    }

    /// Repository over a shared `MemoryStore`
    pub struct TestRepository {
        store: MemoryStore,
        repository: SavedSetRepository,
    }

    impl TestRepository {
        pub fn new() -> Self {
            let store = MemoryStore::new();
            let repository = SavedSetRepository::new(Box::new(store.clone()));
            Self { store, repository }
        }

        pub fn repository(&self) -> &SavedSetRepository {
            &self.repository
        }

        /// Write a raw blob under the storage key
        pub fn seed(&self, raw: &str) {
            self.store
                .set(STORAGE_KEY, raw)
                .expect("memory store never fails");
        }

        /// Raw blob currently under the storage key
        pub fn stored(&self) -> Option<String> {
            self.store.raw(STORAGE_KEY)
        }
    }

    pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, day, hour, 0, 0).unwrap()
    }

    /// Snapshot of the window for `anchor`, saved at `saved_at`
    pub fn sample_set(anchor: &str, saved_at: DateTime<Utc>) -> SavedDateSet {
        let window = DateWindow::calculate(anchor).expect("valid sample anchor");
        SavedDateSet::snapshot(&window, saved_at)
    }
}

#[cfg(test)]
mod tests {
    use super::test_harness::*;
    use crate::infrastructure::KeyValueStore;

    #[test]
    fn test_memory_store_clones_share_values() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_harness_seeds_raw_blob() {
        let harness = TestRepository::new();
        harness.seed("[]");
        assert_eq!(harness.stored().as_deref(), Some("[]"));
        assert!(harness.repository().load_all().unwrap().is_empty());
    }

    #[test]
    fn test_harness_isolation() {
        let first = TestRepository::new();
        let second = TestRepository::new();

        first.seed("[]");
        assert_eq!(second.stored(), None);
    }
}
