use crate::{KeyValueStore, LOCAL_USERS_KEY, Result as CoreResult, UserRecord};

use log::warn;

/// Access to the persisted collection of locally added users
pub struct LocalRecords;

impl LocalRecords {
    /// Decode a persisted collection. Blank input is an empty collection.
    pub fn decode(raw: &str) -> CoreResult<Vec<UserRecord>> {
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the persisted collection in stored order.
    ///
    /// Missing, unreadable or malformed data is logged and treated as empty.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Vec<UserRecord> {
        let raw = match store.get(LOCAL_USERS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Error reading local users: {}", e);
                return Vec::new();
            }
        };

        Self::decode(&raw).unwrap_or_else(|e| {
            warn!("Error loading local users, ignoring stored data: {}", e);
            Vec::new()
        })
    }

    /// Re-read the persisted collection, put `record` in front, write it back
    pub fn prepend<S: KeyValueStore + ?Sized>(
        store: &mut S,
        record: &UserRecord,
    ) -> CoreResult<()> {
        let existing = Self::load(&*store);

        let mut records = Vec::with_capacity(existing.len() + 1);
        records.push(record.clone());
        records.extend(existing);

        let encoded = serde_json::to_string(&records)?;
        store.set(LOCAL_USERS_KEY, &encoded)
    }
}
