//! Card entity

use crate::content::ContentRef;
use crate::math::{Rect, Size, Vec2, CHROME_STYLE};
use super::{CardId, ResizeHandle};

/// One arrangeable rectangle hosting an embedded player plus its chrome
///
/// Geometry, z-order and lock state are only mutated through
/// [`CardRegistry`](super::CardRegistry), which enforces the lock and
/// minimum-size invariants.
#[derive(Clone, Debug)]
pub struct Card {
    pub(crate) id: CardId,
    pub(crate) content: ContentRef,
    pub(crate) position: Vec2,
    pub(crate) size: Size,
    pub(crate) z_order: u32,
    pub(crate) locked: bool,
    /// Rectangle to return to when leaving fullscreen
    pub(crate) restore_rect: Option<Rect>,
}

impl Card {
    #[inline]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Content this card embeds (fixed for the card's lifetime)
    #[inline]
    pub fn content(&self) -> &ContentRef {
        &self.content
    }

    /// Top-left corner in page pixels
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Stacking key, higher paints above lower
    #[inline]
    pub fn z_order(&self) -> u32 {
        self.z_order
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[inline]
    pub fn is_fullscreen(&self) -> bool {
        self.restore_rect.is_some()
    }

    /// Whether drag, resize and focus currently apply to this card
    #[inline]
    pub fn is_interactive(&self) -> bool {
        !self.locked && !self.is_fullscreen()
    }

    /// Get the card's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Rectangle the card occupies outside fullscreen
    pub fn arranged_rect(&self) -> Rect {
        self.restore_rect.unwrap_or_else(|| self.rect())
    }

    /// Rectangle of the control button at `slot`, counted from the right edge
    pub fn button_rect(&self, slot: usize) -> Rect {
        let slot = slot as f32;
        let x = self.position.x + self.size.width
            - CHROME_STYLE.button_margin
            - CHROME_STYLE.button_size * (slot + 1.0)
            - CHROME_STYLE.button_spacing * slot;
        let y = self.position.y + CHROME_STYLE.button_margin;
        Rect::new(x, y, CHROME_STYLE.button_size, CHROME_STYLE.button_size)
    }

    /// Rectangle of a corner resize handle
    pub fn handle_rect(&self, handle: ResizeHandle) -> Rect {
        let s = CHROME_STYLE.resize_handle_size;
        let rect = self.rect();
        let x = if handle.moves_west() { rect.x } else { rect.right() - s };
        let y = if handle.moves_north() { rect.y } else { rect.bottom() - s };
        Rect::new(x, y, s, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_card() -> Card {
        Card {
            id: 1,
            content: ContentRef::parse("dQw4w9WgXcQ").unwrap(),
            position: Vec2::new(100.0, 100.0),
            size: Size::new(320.0, 180.0),
            z_order: 1,
            locked: false,
            restore_rect: None,
        }
    }

    #[test]
    fn test_card_rect() {
        let c = create_test_card();
        let r = c.rect();
        assert!((r.x - 100.0).abs() < 0.001);
        assert!((r.y - 100.0).abs() < 0.001);
        assert!((r.width - 320.0).abs() < 0.001);
        assert!((r.height - 180.0).abs() < 0.001);
    }

    #[test]
    fn test_button_rects_run_right_to_left() {
        let c = create_test_card();
        let first = c.button_rect(0);
        let second = c.button_rect(1);
        assert!((first.right() - (420.0 - CHROME_STYLE.button_margin)).abs() < 0.001);
        assert!(second.right() <= first.x);
        assert!((first.y - (100.0 + CHROME_STYLE.button_margin)).abs() < 0.001);
    }

    #[test]
    fn test_handle_rects_sit_in_corners() {
        let c = create_test_card();
        let nw = c.handle_rect(ResizeHandle::NW);
        let se = c.handle_rect(ResizeHandle::SE);
        assert!((nw.x - 100.0).abs() < 0.001);
        assert!((nw.y - 100.0).abs() < 0.001);
        assert!((se.right() - 420.0).abs() < 0.001);
        assert!((se.bottom() - 280.0).abs() < 0.001);
    }

    #[test]
    fn test_locked_card_is_not_interactive() {
        let mut c = create_test_card();
        assert!(c.is_interactive());
        c.locked = true;
        assert!(!c.is_interactive());
    }
}
