use anyhow::Result;

/// String key-value storage holding serialized blobs.
///
/// Values are always read and written whole; there are no partial updates.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Get storage backend information
    fn backend_info(&self) -> &str;
}
