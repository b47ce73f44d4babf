//! Gesture router state machine

use crate::card::{CardId, ResizeHandle};
use crate::math::{Rect, Vec2};
use super::Gesture;

/// Holds the single active gesture
///
/// Idle is `None`. A gesture can only start from idle, so two gestures never
/// run at once.
pub struct GestureRouter {
    gesture: Option<Gesture>,
}

impl Default for GestureRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRouter {
    pub fn new() -> Self {
        Self { gesture: None }
    }

    /// Get the active gesture
    #[inline]
    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.gesture.is_none()
    }

    /// Whether the active gesture targets `card_id`
    pub fn targets(&self, card_id: CardId) -> bool {
        self.gesture.as_ref().map_or(false, |g| g.card_id() == card_id)
    }

    /// Enter `Dragging`; refused unless idle
    pub fn start_drag(&mut self, card_id: CardId, offset: Vec2) -> bool {
        self.start(Gesture::Dragging { card_id, offset })
    }

    /// Enter `Resizing`; refused unless idle
    pub fn start_resize(
        &mut self,
        card_id: CardId,
        handle: ResizeHandle,
        start_pointer: Vec2,
        start_rect: Rect,
    ) -> bool {
        self.start(Gesture::Resizing {
            card_id,
            handle,
            start_pointer,
            start_rect,
        })
    }

    fn start(&mut self, gesture: Gesture) -> bool {
        if self.gesture.is_some() {
            return false;
        }
        self.gesture = Some(gesture);
        true
    }

    /// Return to idle, handing back the gesture that ended
    pub fn end(&mut self) -> Option<Gesture> {
        self.gesture.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_lifecycle() {
        let mut router = GestureRouter::new();
        assert!(router.is_idle());

        assert!(router.start_drag(1, Vec2::new(10.0, 10.0)));
        assert!(!router.is_idle());
        assert!(router.targets(1));
        assert!(!router.targets(2));

        let ended = router.end().unwrap();
        assert!(ended.is_drag());
        assert!(router.is_idle());
        assert!(router.end().is_none());
    }

    #[test]
    fn test_second_gesture_is_refused() {
        let mut router = GestureRouter::new();
        assert!(router.start_drag(1, Vec2::ZERO));
        assert!(!router.start_resize(2, ResizeHandle::SE, Vec2::ZERO, Rect::new(0.0, 0.0, 320.0, 180.0)));
        assert!(!router.start_drag(3, Vec2::ZERO));
        assert_eq!(router.gesture().map(|g| g.card_id()), Some(1));
    }

    #[test]
    fn test_resize_lifecycle() {
        let mut router = GestureRouter::new();
        assert!(router.start_resize(5, ResizeHandle::NE, Vec2::new(500.0, 400.0), Rect::new(100.0, 100.0, 400.0, 225.0)));
        assert!(matches!(router.gesture(), Some(Gesture::Resizing { handle: ResizeHandle::NE, .. })));
    }
}
