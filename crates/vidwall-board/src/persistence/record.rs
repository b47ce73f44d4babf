//! Durable card record

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use crate::card::{Card, CardOptions};
use crate::config::BoardConfig;
use crate::content::ContentRef;
use crate::math::{Size, Vec2};

/// One saved card, as stored in the durable slot
///
/// There is no schema version. Missing, null or out-of-range fields fall
/// back to the board's defaults and unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardRecord {
    pub content_ref: String,
    #[serde(deserialize_with = "lenient")]
    pub left: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    pub top: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    pub width: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    pub height: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    pub z_order: Option<u32>,
    #[serde(deserialize_with = "lenient_flag")]
    pub locked: bool,
}

/// Any JSON value; a value of the wrong type or range reads as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(lenient::<D, bool>(deserializer)?.unwrap_or(false))
}

impl CardRecord {
    /// Capture a live card
    pub fn from_card(card: &Card) -> Self {
        let rect = card.arranged_rect();
        Self {
            content_ref: card.content().as_str().to_string(),
            left: Some(rect.x.round() as i32),
            top: Some(rect.y.round() as i32),
            width: Some(rect.width.round() as i32),
            height: Some(rect.height.round() as i32),
            z_order: Some(card.z_order()),
            locked: card.is_locked(),
        }
    }

    /// The stored reference, if it is a valid video id
    pub fn content(&self) -> Option<ContentRef> {
        ContentRef::from_id(&self.content_ref)
    }

    /// Placement options for replaying this record through card creation
    pub fn options(&self, config: &BoardConfig) -> CardOptions {
        let position = Vec2::new(
            self.left.map_or(config.default_position.x, |v| v as f32),
            self.top.map_or(config.default_position.y, |v| v as f32),
        );
        let size = Size::new(
            self.width.map_or(config.default_size.width, |v| v as f32),
            self.height.map_or(config.default_size.height, |v| v as f32),
        );
        CardOptions {
            position: Some(position),
            size: Some(size),
            z_order: self.z_order.filter(|&z| z > 0),
            locked: self.locked,
        }
    }
}
