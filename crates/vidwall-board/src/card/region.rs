//! Card regions for hit testing

use serde::Serialize;

/// One of the four corner resize handles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    NW,
    NE,
    SW,
    SE,
}

impl ResizeHandle {
    /// All handles, in the order the chrome creates them
    pub const ALL: [ResizeHandle; 4] = [
        ResizeHandle::NW,
        ResizeHandle::NE,
        ResizeHandle::SW,
        ResizeHandle::SE,
    ];

    /// Parse a direction name (`"nw"`, `"ne"`, `"sw"`, `"se"`)
    pub fn parse(direction: &str) -> Option<Self> {
        match direction {
            "nw" => Some(ResizeHandle::NW),
            "ne" => Some(ResizeHandle::NE),
            "sw" => Some(ResizeHandle::SW),
            "se" => Some(ResizeHandle::SE),
            _ => None,
        }
    }

    /// The west edge follows the pointer (east edge stays anchored)
    #[inline]
    pub fn moves_west(self) -> bool {
        matches!(self, ResizeHandle::NW | ResizeHandle::SW)
    }

    /// The north edge follows the pointer (south edge stays anchored)
    #[inline]
    pub fn moves_north(self) -> bool {
        matches!(self, ResizeHandle::NW | ResizeHandle::NE)
    }

    /// Get CSS cursor style for this handle
    pub fn cursor(self) -> &'static str {
        match self {
            ResizeHandle::NE | ResizeHandle::SW => "nesw-resize",
            ResizeHandle::NW | ResizeHandle::SE => "nwse-resize",
        }
    }
}

/// Region of a card for hit testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardRegion {
    /// Move affordance (starts a drag)
    MoveHandle,
    /// Lock / unlock toggle
    LockButton,
    /// Copy the content reference
    CopyButton,
    /// Fullscreen toggle
    FullscreenButton,
    /// Delete (possibly via confirmation)
    DeleteButton,
    /// Corner resize handle
    Resize(ResizeHandle),
    /// Anywhere else on the card, including the embedded player
    Body,
}

impl CardRegion {
    /// Control buttons with their slot index counted from the right edge
    pub const BUTTONS: [(usize, CardRegion); 5] = [
        (0, CardRegion::DeleteButton),
        (1, CardRegion::FullscreenButton),
        (2, CardRegion::CopyButton),
        (3, CardRegion::LockButton),
        (4, CardRegion::MoveHandle),
    ];

    /// Check if this is a resize region
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, CardRegion::Resize(_))
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            CardRegion::MoveHandle => "move",
            CardRegion::Body => "default",
            CardRegion::LockButton
            | CardRegion::CopyButton
            | CardRegion::FullscreenButton
            | CardRegion::DeleteButton => "pointer",
            CardRegion::Resize(handle) => handle.cursor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directions() {
        assert_eq!(ResizeHandle::parse("nw"), Some(ResizeHandle::NW));
        assert_eq!(ResizeHandle::parse("se"), Some(ResizeHandle::SE));
        assert_eq!(ResizeHandle::parse("n"), None);
        assert_eq!(ResizeHandle::parse("invalid"), None);
    }

    #[test]
    fn test_anchor_edges() {
        assert!(ResizeHandle::NW.moves_west() && ResizeHandle::NW.moves_north());
        assert!(!ResizeHandle::NE.moves_west() && ResizeHandle::NE.moves_north());
        assert!(ResizeHandle::SW.moves_west() && !ResizeHandle::SW.moves_north());
        assert!(!ResizeHandle::SE.moves_west() && !ResizeHandle::SE.moves_north());
    }

    #[test]
    fn test_region_cursor() {
        assert_eq!(CardRegion::MoveHandle.cursor(), "move");
        assert_eq!(CardRegion::Resize(ResizeHandle::SE).cursor(), "nwse-resize");
        assert!(CardRegion::Resize(ResizeHandle::NE).is_resize());
        assert!(!CardRegion::Body.is_resize());
    }
}
