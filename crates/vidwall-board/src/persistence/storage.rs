//! Durable key/value storage seam

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use crate::error::StorageError;

/// Synchronous string store (browser `localStorage` or an in-memory stand-in)
pub trait Storage {
    /// Read a slot; `Ok(None)` means the slot was never written
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace a slot's value
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    slots: BTreeMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

/// In-memory storage for tests and for hosts without durable storage
///
/// Clones share the same slots, so a test can keep one clone to inspect what
/// the engine wrote or to reload from it.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw slot contents
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().slots.get(key).cloned()
    }

    /// Overwrite a slot directly, bypassing failure injection
    pub fn insert(&self, key: &str, value: &str) {
        self.inner
            .borrow_mut()
            .slots
            .insert(key.to_string(), value.to_string());
    }

    /// Make subsequent reads fail with [`StorageError::Unavailable`]
    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.borrow_mut().fail_reads = fail;
    }

    /// Make subsequent writes fail with [`StorageError::QuotaExceeded`]
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.inner.borrow();
        if inner.fail_reads {
            return Err(StorageError::Unavailable);
        }
        Ok(inner.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(StorageError::QuotaExceeded);
        }
        inner.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
