//! Placement options for card creation

use crate::math::{Size, Vec2};

/// Options for creating a card
///
/// Interactive creation uses the defaults; restoring a snapshot fills every
/// field so the card reappears where it was saved.
#[derive(Clone, Debug, Default)]
pub struct CardOptions {
    /// Initial position (None = default spawn point)
    pub position: Option<Vec2>,
    /// Initial size (None = default size)
    pub size: Option<Size>,
    /// Requested z-order; honored only if it does not exceed the current maximum
    pub z_order: Option<u32>,
    /// Start locked
    pub locked: bool,
}
