//! Grid and sibling-size snapping
//!
//! Pure functions; the only state they see is the sibling sizes handed in.

use crate::card::CardId;
use crate::math::Size;

/// Grid units used while positioning and sizing cards
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    /// Unit for sizes and anchored-edge repositioning
    pub coarse: f32,
    /// Unit for drag positions
    pub fine: f32,
}

impl Default for Grid {
    fn default() -> Self {
        Self { coarse: 10.0, fine: 5.0 }
    }
}

impl Grid {
    /// Round `value` to the nearest multiple of the fine or coarse unit
    #[inline]
    pub fn snap(&self, value: f32, fine: bool) -> f32 {
        snap_to(value, if fine { self.fine } else { self.coarse })
    }
}

/// Round `value` to the nearest multiple of `unit`, halves rounding up
///
/// Halves go toward positive infinity on both sides of zero so that pointer
/// positions just left of the viewport round the same way as positions inside it.
#[inline]
pub fn snap_to(value: f32, unit: f32) -> f32 {
    if unit <= 0.0 {
        return value;
    }
    (value / unit + 0.5).floor() * unit
}

/// Snap `candidate` to the nearest sibling size within `threshold`
///
/// A sibling qualifies when both its width and height are within `threshold`
/// of the candidate. The qualifying sibling with the smallest Manhattan
/// distance wins; on a tie the first one in iteration order is kept. The
/// card being resized (`target`) is never its own sibling. Returns the
/// candidate unchanged when nothing qualifies.
pub fn snapped_size<I>(target: CardId, candidate: Size, siblings: I, threshold: f32) -> Size
where
    I: IntoIterator<Item = (CardId, Size)>,
{
    let mut best: Option<(Size, f32)> = None;

    for (id, size) in siblings {
        if id == target || !size.within(candidate, threshold) {
            continue;
        }
        let distance = size.manhattan(candidate);
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((size, distance)),
        }
    }

    best.map(|(size, _)| size).unwrap_or(candidate)
}
