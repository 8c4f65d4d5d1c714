use crate::Result as CoreResult;

/// Durable string key/value storage.
///
/// Reads and writes are synchronous. Values are opaque strings; callers own
/// the encoding.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when the key has never been written
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> CoreResult<()>;
}
