//! Persistence module for card state
//!
//! Provides the durable record format, the storage seam and the adapter that
//! snapshots the registry into one storage slot.

mod adapter;
mod record;
mod storage;

pub use adapter::PersistenceAdapter;
pub use record::CardRecord;
pub use storage::{MemoryStorage, Storage};
