//! Board configuration
//!
//! Every tunable of the layout engine lives here so that the browser host can
//! override any of them with a partial JSON object.

use serde::{Deserialize, Serialize};
use crate::math::{Size, Vec2};

/// Tunables for snapping, sizing, persistence and polling
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Coarse grid unit, applied to sizes during resize
    pub grid_unit: f32,
    /// Fine grid unit, applied to positions during drag and resize
    pub fine_grid_unit: f32,
    /// Maximum per-dimension difference for sibling-size snapping
    pub snap_threshold: f32,
    /// Smallest allowed card size
    pub min_size: Size,
    /// Width / height ratio kept by corner resizes
    pub aspect_ratio: f32,
    /// Spawn position for cards created without explicit placement
    pub default_position: Vec2,
    /// Spawn size for cards created without explicit size
    pub default_size: Size,
    /// Durable storage slot holding the card list
    pub storage_key: String,
    /// Interval between transport-status polls of a ready player
    pub transport_poll_ms: f64,
    /// Whether deletion waits for an explicit confirmation
    pub confirm_delete: bool,
    /// Initial viewport size, replaced by the host on load and on resize
    pub viewport: Size,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            grid_unit: 10.0,
            fine_grid_unit: 5.0,
            snap_threshold: 20.0,
            min_size: Size::new(160.0, 90.0),
            aspect_ratio: 16.0 / 9.0,
            default_position: Vec2::new(100.0, 100.0),
            default_size: Size::new(320.0, 180.0),
            storage_key: "vidwall.cards".to_string(),
            transport_poll_ms: 250.0,
            confirm_delete: true,
            viewport: Size::new(1920.0, 1080.0),
        }
    }
}

impl BoardConfig {
    /// Parse a (possibly partial) JSON configuration
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
