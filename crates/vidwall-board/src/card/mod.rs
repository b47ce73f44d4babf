//! Card management module
//!
//! Provides card lifecycle, z-order, locking and hit testing.

#[allow(clippy::module_inception)]
mod card;
mod options;
mod region;
mod registry;

pub use card::Card;
pub use options::CardOptions;
pub use region::{CardRegion, ResizeHandle};
pub use registry::CardRegistry;

/// Unique card identifier, never reused within a session
pub type CardId = u64;
