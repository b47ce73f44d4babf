//! Input routing module
//!
//! Provides the gesture state machine for drag/resize operations and the
//! geometry each pointer move produces.

mod gesture;
mod result;
mod router;
mod shortcut;

pub use gesture::Gesture;
pub use result::InputResult;
pub use router::GestureRouter;
pub use shortcut::ShortcutAction;

use crate::card::{CardId, ResizeHandle};
use crate::config::BoardConfig;
use crate::geometry::{snapped_size, Grid};
use crate::math::{Rect, Size, Vec2};

/// Limits applied to every drag and resize step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureLimits {
    pub grid: Grid,
    pub min_size: Size,
    /// Width / height
    pub aspect_ratio: f32,
    pub snap_threshold: f32,
    /// Cards are kept inside `(0, 0)..viewport`
    pub viewport: Size,
}

impl GestureLimits {
    pub fn new(config: &BoardConfig, viewport: Size) -> Self {
        Self {
            grid: Grid {
                coarse: config.grid_unit,
                fine: config.fine_grid_unit,
            },
            min_size: config.min_size,
            aspect_ratio: config.aspect_ratio,
            snap_threshold: config.snap_threshold,
            viewport,
        }
    }
}

impl Default for GestureLimits {
    fn default() -> Self {
        let config = BoardConfig::default();
        Self::new(&config, config.viewport)
    }
}

/// Clamp `value` to `0..=max`, preferring 0 when the card is larger than the viewport
#[inline]
fn clamp_to_viewport(value: f32, max: f32) -> f32 {
    value.min(max).max(0.0)
}

/// Calculate a card's position for a drag step
///
/// Fine grid snap first, then keep the whole card inside the viewport.
pub fn calculate_drag(pointer: Vec2, offset: Vec2, size: Size, limits: &GestureLimits) -> Vec2 {
    let raw = pointer - offset;
    let x = limits.grid.snap(raw.x, true);
    let y = limits.grid.snap(raw.y, true);
    Vec2::new(
        clamp_to_viewport(x, limits.viewport.width - size.width),
        clamp_to_viewport(y, limits.viewport.height - size.height),
    )
}

/// Calculate a card's rectangle for a resize step
///
/// `siblings` are the current sizes of live cards in registry order; the
/// resized card is skipped by id. The corner opposite `handle` stays fixed.
pub fn calculate_resize<I>(
    card_id: CardId,
    handle: ResizeHandle,
    start: Rect,
    delta: Vec2,
    siblings: I,
    limits: &GestureLimits,
) -> Rect
where
    I: IntoIterator<Item = (CardId, Size)>,
{
    let mut width = if handle.moves_west() {
        start.width - delta.x
    } else {
        start.width + delta.x
    };
    let mut height = if handle.moves_north() {
        start.height - delta.y
    } else {
        start.height + delta.y
    };
    width = width.max(limits.min_size.width);
    height = height.max(limits.min_size.height);

    // The axis that moved further drives the other
    if delta.x.abs() > delta.y.abs() {
        height = width / limits.aspect_ratio;
    } else {
        width = height * limits.aspect_ratio;
    }

    let snapped = snapped_size(card_id, Size::new(width, height), siblings, limits.snap_threshold);
    let size = Size::new(
        limits.grid.snap(snapped.width, false),
        limits.grid.snap(snapped.height, false),
    );

    let mut x = start.x;
    let mut y = start.y;
    if handle.moves_west() {
        x = start.right() - size.width;
        x = clamp_to_viewport(x, limits.viewport.width - size.width);
        x = limits.grid.snap(x, true);
    }
    if handle.moves_north() {
        y = start.bottom() - size.height;
        y = clamp_to_viewport(y, limits.viewport.height - size.height);
        y = limits.grid.snap(y, true);
    }

    Rect::new(x, y, size.width, size.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Rect {
        Rect::new(400.0, 300.0, 320.0, 180.0)
    }

    fn no_siblings() -> Vec<(CardId, Size)> {
        Vec::new()
    }

    #[test]
    fn test_resize_se_width_driven() {
        let rect = calculate_resize(1, ResizeHandle::SE, start(), Vec2::new(200.0, 0.0), no_siblings(), &GestureLimits::default());
        // 520 / (16/9) = 292.5 before the coarse grid
        assert!((rect.width - 520.0).abs() < 0.001);
        assert!((rect.height - 290.0).abs() < 0.001);
        assert!((rect.x - 400.0).abs() < 0.001);
        assert!((rect.y - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_height_driven() {
        let rect = calculate_resize(1, ResizeHandle::SE, start(), Vec2::new(10.0, 90.0), no_siblings(), &GestureLimits::default());
        // 270 * 16/9 = 480
        assert!((rect.height - 270.0).abs() < 0.001);
        assert!((rect.width - 480.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_nw_keeps_opposite_corner() {
        let start = start();
        let rect = calculate_resize(1, ResizeHandle::NW, start, Vec2::new(-160.0, 0.0), no_siblings(), &GestureLimits::default());
        assert!((rect.width - 480.0).abs() < 0.001);
        assert!((rect.height - 270.0).abs() < 0.001);
        assert!((rect.right() - start.right()).abs() < 0.001);
        assert!((rect.bottom() - start.bottom()).abs() < 0.001);
    }

    #[test]
    fn test_resize_ne_moves_only_top() {
        let start = start();
        let rect = calculate_resize(1, ResizeHandle::NE, start, Vec2::new(0.0, -90.0), no_siblings(), &GestureLimits::default());
        assert!((rect.x - start.x).abs() < 0.001);
        assert!((rect.height - 270.0).abs() < 0.001);
        assert!((rect.bottom() - start.bottom()).abs() < 0.001);
    }

    #[test]
    fn test_resize_respects_minimum() {
        let rect = calculate_resize(1, ResizeHandle::SE, start(), Vec2::new(-500.0, -10.0), no_siblings(), &GestureLimits::default());
        assert!((rect.width - 160.0).abs() < 0.001);
        assert!((rect.height - 90.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_snaps_to_closest_sibling() {
        let siblings = vec![
            (2, Size::new(640.0, 360.0)),
            (3, Size::new(642.0, 361.0)),
        ];
        // Candidate 645 x 362.8 lands on the 642 x 361 sibling before the grid
        let start = Rect::new(0.0, 0.0, 320.0, 180.0);
        let rect = calculate_resize(1, ResizeHandle::SE, start, Vec2::new(325.0, 0.0), siblings, &GestureLimits::default());
        assert!((rect.width - 640.0).abs() < 0.001);
        assert!((rect.height - 360.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_west_clamped_to_viewport() {
        let start = Rect::new(20.0, 300.0, 320.0, 180.0);
        let rect = calculate_resize(1, ResizeHandle::SW, start, Vec2::new(-300.0, 0.0), no_siblings(), &GestureLimits::default());
        assert!((rect.x - 0.0).abs() < 0.001);
        assert!((rect.width - 620.0).abs() < 0.001);
    }

    #[test]
    fn test_drag_snaps_then_clamps() {
        let limits = GestureLimits::default();
        let size = Size::new(320.0, 180.0);

        let pos = calculate_drag(Vec2::new(233.0, 147.0), Vec2::new(10.0, 10.0), size, &limits);
        assert!((pos.x - 225.0).abs() < 0.001);
        assert!((pos.y - 135.0).abs() < 0.001);

        let pos = calculate_drag(Vec2::new(-50.0, 5000.0), Vec2::ZERO, size, &limits);
        assert!((pos.x - 0.0).abs() < 0.001);
        assert!((pos.y - (1080.0 - 180.0)).abs() < 0.001);
    }

    #[test]
    fn test_drag_card_larger_than_viewport_pins_to_origin() {
        let limits = GestureLimits {
            viewport: Size::new(300.0, 150.0),
            ..GestureLimits::default()
        };
        let pos = calculate_drag(Vec2::new(100.0, 100.0), Vec2::ZERO, Size::new(320.0, 180.0), &limits);
        assert_eq!(pos, Vec2::ZERO);
    }
}
