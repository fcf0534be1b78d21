//! Local key-value storage for display-only wallet data.
//!
//! Holds nothing sensitive: the only value kept here is the wallet address
//! placeholder shown on the settings screen.

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> LedgerResult<()>;
    fn remove(&self, key: &str) -> LedgerResult<()>;
}

/// Ephemeral store, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E>(_: E) -> LedgerError {
    LedgerError::StorageError("memory store lock poisoned".to_string())
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> LedgerResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// Embedded on-disk store, the local equivalent of browser storage
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    pub fn open<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let db = sled::open(path.as_ref()).map_err(|e| {
            LedgerError::StorageError(format!("Failed to open store at {:?}: {}", path.as_ref(), e))
        })?;
        info!("Opened wallet store at {:?}", path.as_ref());
        Ok(Self { db })
    }
}

fn sled_error(e: sled::Error) -> LedgerError {
    LedgerError::StorageError(e.to_string())
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        match self.db.get(key).map_err(sled_error)? {
            Some(bytes) => String::from_utf8(bytes.to_vec())
                .map(Some)
                .map_err(|e| LedgerError::StorageError(format!("Value for {} is not UTF-8: {}", key, e))),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> LedgerResult<()> {
        self.db.insert(key, value.as_bytes()).map_err(sled_error)?;
        self.db.flush().map_err(sled_error)?;
        debug!("Stored {}", key);
        Ok(())
    }

    fn remove(&self, key: &str) -> LedgerResult<()> {
        self.db.remove(key).map_err(sled_error)?;
        self.db.flush().map_err(sled_error)?;
        debug!("Removed {}", key);
        Ok(())
    }
}
