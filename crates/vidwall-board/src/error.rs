//! Error types for the board
//!
//! Only [`ContentError`] ever reaches callers of the engine. The others are
//! produced by collaborators, logged where they occur and then dropped, so a
//! failing store or player degrades one feature instead of the session.

/// Rejection of user-supplied content input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// Input was empty or whitespace.
    #[error("no content reference given")]
    Empty,

    /// Input did not contain a recognizable video identifier.
    #[error("not a valid YouTube URL or video ID: {0}")]
    Unrecognized(String),
}

/// Failure of the durable key/value store.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The store is not reachable (disabled, private mode, no window).
    #[error("storage unavailable")]
    Unavailable,

    /// The write did not fit in the remaining quota.
    #[error("storage quota exceeded")]
    QuotaExceeded,

    /// Any other backend failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Failure to read or write the persisted card list.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// Underlying store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Stored text is not a card list.
    #[error("malformed snapshot: {0}")]
    Malformed(String),

    /// A record parsed but holds unusable values.
    #[error("invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        SnapshotError::Malformed(e.to_string())
    }
}

/// Failure of a player adapter call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    /// The embedded player has not finished initializing.
    #[error("player not ready")]
    NotReady,

    /// The player was torn down.
    #[error("player destroyed")]
    Destroyed,

    /// The third-party player rejected or threw on the call.
    #[error("player backend error: {0}")]
    Backend(String),
}
