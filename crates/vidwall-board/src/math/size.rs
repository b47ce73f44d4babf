//! 2D size type for dimensions

use serde::{Deserialize, Serialize};

/// 2D size for width and height
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Raise each dimension to at least the given minimum
    #[inline]
    pub fn at_least(self, min: Size) -> Self {
        Self::new(self.width.max(min.width), self.height.max(min.height))
    }

    /// Manhattan distance between two sizes (`|Δwidth| + |Δheight|`)
    #[inline]
    pub fn manhattan(self, other: Size) -> f32 {
        (self.width - other.width).abs() + (self.height - other.height).abs()
    }

    /// Whether both dimensions are within `threshold` of `other`
    #[inline]
    pub fn within(self, other: Size, threshold: f32) -> bool {
        (self.width - other.width).abs() <= threshold
            && (self.height - other.height).abs() <= threshold
    }
}
