//! Snapshot save/load against one storage slot

use crate::card::CardRegistry;
use crate::error::SnapshotError;
use super::{CardRecord, Storage};

/// Writes the whole registry to a single well-known key and reads it back
///
/// Neither direction ever fails toward the caller: write errors are logged
/// and dropped, and any read error or corrupt content loads as "nothing saved".
pub struct PersistenceAdapter {
    storage: Box<dyn Storage>,
    key: String,
}

impl PersistenceAdapter {
    /// Create an adapter bound to `key`
    pub fn new(storage: Box<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Storage key this adapter owns
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Snapshot every live card, replacing the previous value
    pub fn save_all(&mut self, registry: &CardRegistry) {
        if let Err(e) = self.try_save(registry) {
            log::warn!("failed to save {} cards: {}", registry.count(), e);
        }
    }

    /// Load the saved card list; empty on first run, read failure or corruption
    pub fn load_all(&self) -> Vec<CardRecord> {
        match self.try_load() {
            Ok(records) => records,
            Err(e) => {
                log::warn!("ignoring saved cards under {:?}: {}", self.key, e);
                Vec::new()
            }
        }
    }

    fn try_save(&mut self, registry: &CardRegistry) -> Result<(), SnapshotError> {
        let records: Vec<CardRecord> = registry.iter().map(CardRecord::from_card).collect();
        let json = serde_json::to_string(&records)?;
        self.storage.write(&self.key, &json)?;
        Ok(())
    }

    fn try_load(&self) -> Result<Vec<CardRecord>, SnapshotError> {
        let json = match self.storage.read(&self.key)? {
            Some(json) => json,
            None => return Ok(Vec::new()),
        };
        let records: Vec<CardRecord> = serde_json::from_str(&json)?;
        validate(&records)?;
        Ok(records)
    }
}

/// Reject the whole list if any record cannot be replayed
fn validate(records: &[CardRecord]) -> Result<(), SnapshotError> {
    for (index, record) in records.iter().enumerate() {
        if record.content().is_none() {
            return Err(SnapshotError::InvalidRecord {
                index,
                reason: format!("bad content reference {:?}", record.content_ref),
            });
        }
    }
    Ok(())
}
