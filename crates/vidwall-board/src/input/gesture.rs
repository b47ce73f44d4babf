//! Gesture state for pointer operations

use crate::card::{CardId, ResizeHandle};
use crate::math::{Rect, Vec2};

/// The one gesture in progress, if any
#[derive(Clone, Debug, PartialEq)]
pub enum Gesture {
    /// Translating a card
    Dragging {
        /// Card being moved
        card_id: CardId,
        /// Offset from card origin to pointer at press time
        offset: Vec2,
    },
    /// Resizing a card from a corner
    Resizing {
        /// Card being resized
        card_id: CardId,
        /// Which corner handle
        handle: ResizeHandle,
        /// Pointer position at press time
        start_pointer: Vec2,
        /// Card rectangle at press time
        start_rect: Rect,
    },
}

impl Gesture {
    #[inline]
    pub fn is_drag(&self) -> bool {
        matches!(self, Gesture::Dragging { .. })
    }

    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, Gesture::Resizing { .. })
    }

    /// Card this gesture targets
    pub fn card_id(&self) -> CardId {
        match self {
            Gesture::Dragging { card_id, .. } | Gesture::Resizing { card_id, .. } => *card_id,
        }
    }
}
