//! Input panel and live overlay state

use serde::Serialize;
use crate::card::CardId;
use crate::error::ContentError;
use crate::math::Size;
use super::BoardEngine;

/// Page-level feedback shown while a gesture runs
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    /// Alignment grid, visible during a resize
    pub show_grid: bool,
    /// Live size readout, e.g. `"640 × 360"`
    pub size_readout: Option<String>,
}

impl Overlay {
    pub fn clear(&mut self) {
        self.show_grid = false;
        self.size_readout = None;
    }
}

/// Text panel for adding content by reference
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputPanel {
    pub open: bool,
    pub text: String,
    /// Rejection message for the last submission
    pub error: Option<String>,
}

/// Format a size for the live readout
pub fn format_size(size: Size) -> String {
    format!("{} × {}", size.width.round() as i64, size.height.round() as i64)
}

impl BoardEngine {
    #[inline]
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    #[inline]
    pub fn panel(&self) -> &InputPanel {
        &self.panel
    }

    pub fn open_panel(&mut self) {
        self.panel.open = true;
    }

    /// Close the panel, discarding its text and message
    pub fn close_panel(&mut self) {
        self.panel = InputPanel::default();
    }

    pub fn toggle_panel(&mut self) {
        if self.panel.open {
            self.close_panel();
        } else {
            self.open_panel();
        }
    }

    /// Replace the panel text; editing clears a previous rejection
    pub fn set_panel_text(&mut self, text: &str) {
        self.panel.text = text.to_string();
        self.panel.error = None;
    }

    /// Create a card from the panel text
    ///
    /// On success the panel is cleared and closed. On rejection it stays open
    /// with the message set and no card is created.
    pub fn submit_panel(&mut self) -> Option<CardId> {
        let text = self.panel.text.clone();
        match self.add_card_from_input(&text) {
            Ok(id) => {
                self.close_panel();
                Some(id)
            }
            Err(e) => {
                self.panel.open = true;
                self.panel.error = Some(e.to_string());
                None
            }
        }
    }

    /// Add a card from clipboard text
    ///
    /// A rejected paste opens the panel holding the text and the message.
    pub fn paste_reference(&mut self, text: &str) -> Result<CardId, ContentError> {
        self.add_card_from_input(text).map_err(|e| {
            self.panel = InputPanel {
                open: true,
                text: text.trim().to_string(),
                error: Some(e.to_string()),
            };
            e
        })
    }
}
