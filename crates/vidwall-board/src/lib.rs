//! Layout engine for a wall of floating video cards
//!
//! This crate provides the core of the board:
//! - Card lifecycle, z-order and locking
//! - Drag and corner-resize gestures with grid and sibling-size snapping
//! - Hit testing of card controls and resize handles
//! - Content reference extraction from pasted links
//! - Snapshot persistence through a pluggable key/value store
//! - A queued, failure-tolerant boundary to the embedded players
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`)
//! - [`geometry`]: Grid and sibling-size snapping
//! - [`card`]: Card entity, registry and hit regions
//! - [`input`]: Gesture state machine and per-step geometry
//! - [`content`]: Content references and link parsing
//! - [`player`]: Player adapter traits, command queue and transport polling
//! - [`persistence`]: Durable records, storage seam and snapshot adapter
//!
//! ## Example
//!
//! ```rust
//! use vidwall_board::{BoardConfig, BoardEngine, MemoryStorage};
//!
//! let storage = MemoryStorage::new();
//! let mut engine = BoardEngine::new(BoardConfig::default())
//!     .with_storage(Box::new(storage.clone()));
//! engine.restore();
//!
//! let id = engine.add_card_from_input("https://youtu.be/dQw4w9WgXcQ").unwrap();
//! engine.start_resize_drag(id, "se", 420.0, 280.0);
//! engine.handle_pointer_move(620.0, 280.0);
//! engine.handle_pointer_up();
//!
//! assert_eq!(engine.cards().get(id).unwrap().size().width, 520.0);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: Transport polling is driven by the host's clock
//! 3. **Nothing Fatal**: Storage and player failures are logged and absorbed
//! 4. **Minimal Dependencies**: Core types have no browser dependencies

pub mod math;
pub mod geometry;
pub mod card;
pub mod input;
pub mod content;
pub mod player;
pub mod persistence;
pub mod config;
pub mod error;

mod engine;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2, ChromeStyle, CHROME_STYLE};
pub use geometry::{snap_to, snapped_size, Grid};
pub use card::{Card, CardId, CardOptions, CardRegion, CardRegistry, ResizeHandle};
pub use input::{Gesture, GestureLimits, GestureRouter, InputResult, ShortcutAction};
pub use content::ContentRef;
pub use player::{
    NullPlayerBackend, PlaybackState, PlayerBackend, PlayerCommand, PlayerHandle, TransportStatus,
};
pub use persistence::{CardRecord, MemoryStorage, PersistenceAdapter, Storage};
pub use config::BoardConfig;
pub use error::{ContentError, PlayerError, SnapshotError, StorageError};

pub use engine::{format_size, BoardEngine, InputPanel, Overlay};
