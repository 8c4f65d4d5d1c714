//! File-backed key/value store.
//!
//! All keys live in one JSON object file:
//!
//! ```json
//! { "localUsers": "[{\"id\":1704067200000,\"name\":\"Ada\", ...}]" }
//! ```
//!
//! Values are opaque strings, exactly what the caller handed to `set`.
//! Every `get` and `set` goes back to disk, so changes made by another
//! process between calls are seen. Writes replace the whole file via a
//! temporary sibling and a rename.

use crate::{Result as StoreResult, StoreError};

use ud_core::{KeyValueStore, Result as CoreResult};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, warn};

type Entries = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry. A missing or empty file has no entries.
    pub fn read_entries(&self) -> StoreResult<Entries> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&contents).map_err(|e| StoreError::json(&self.path, e))
    }

    /// Replace the file with `entries`
    pub fn write_entries(&self, entries: &Entries) -> StoreResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        }

        let content =
            serde_json::to_string_pretty(entries).map_err(|e| StoreError::json(&self.path, e))?;

        let tmp_path = self.tmp_path();
        std::fs::write(&tmp_path, content).map_err(|e| StoreError::io(&tmp_path, e))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        debug!("Wrote {} store entries to {}", entries.len(), self.path.display());
        Ok(())
    }

    pub(crate) fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    /// A corrupt file is replaced rather than blocking writes forever
    fn set(&mut self, key: &str, value: &str) -> CoreResult<()> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e @ StoreError::Json { .. }) => {
                warn!("Discarding unreadable store contents: {}", e);
                Entries::new()
            }
            Err(e) => return Err(e.into()),
        };

        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)?;
        Ok(())
    }
}
