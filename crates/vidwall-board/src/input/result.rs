//! Input result type

use serde::Serialize;
use crate::card::CardId;

/// Result of input handling, serialized for the page script
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// Press landed on the embedded player; let it through
    Forward {
        /// Target card
        card_id: CardId,
        /// X coordinate in card-local space
        local_x: f32,
        /// Y coordinate in card-local space
        local_y: f32,
    },
    /// The host should place `text` on the clipboard
    Copy {
        card_id: CardId,
        text: String,
    },
    /// The host should ask the user to confirm deleting the card
    #[serde(rename = "confirm_delete")]
    ConfirmDelete {
        card_id: CardId,
    },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }

    /// Check if input should be forwarded
    #[inline]
    pub fn is_forward(&self) -> bool {
        matches!(self, InputResult::Forward { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_tags() {
        let json = serde_json::to_string(&InputResult::Handled).unwrap();
        assert_eq!(json, r#"{"type":"handled"}"#);

        let json = serde_json::to_string(&InputResult::ConfirmDelete { card_id: 3 }).unwrap();
        assert_eq!(json, r#"{"type":"confirm_delete","card_id":3}"#);

        let json = serde_json::to_string(&InputResult::Copy {
            card_id: 1,
            text: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
        })
        .unwrap();
        assert!(json.starts_with(r#"{"type":"copy","card_id":1"#));
    }

    #[test]
    fn test_predicates() {
        assert!(!InputResult::Unhandled.is_handled());
        assert!(InputResult::Handled.is_handled());
        let forward = InputResult::Forward { card_id: 1, local_x: 0.0, local_y: 0.0 };
        assert!(forward.is_handled());
        assert!(forward.is_forward());
    }
}
