//! WASM exports for the board
//!
//! This module provides wasm-bindgen exports for the BoardEngine, allowing
//! the page script to drive the board and render from JSON snapshots.

use serde::Serialize;
use vidwall_board::{BoardConfig, BoardEngine, Card, CardId, ContentError};
use wasm_bindgen::prelude::*;

use crate::player::{player_element_id, YouTubeBackend};
use crate::storage::LocalStorage;

/// Card as the page script renders it
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardView<'a> {
    id: CardId,
    content_ref: &'a str,
    embed_url: String,
    element_id: String,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    z_order: u32,
    locked: bool,
    fullscreen: bool,
}

impl<'a> CardView<'a> {
    fn new(card: &'a Card) -> Self {
        let rect = card.rect();
        Self {
            id: card.id(),
            content_ref: card.content().as_str(),
            embed_url: card.content().embed_url(),
            element_id: player_element_id(card.id()),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            z_order: card.z_order(),
            locked: card.is_locked(),
            fullscreen: card.is_fullscreen(),
        }
    }
}

fn added_json(result: Result<CardId, ContentError>) -> String {
    let value = match result {
        Ok(id) => serde_json::json!({ "ok": true, "id": id }),
        Err(e) => serde_json::json!({ "ok": false, "error": e.to_string() }),
    };
    serde_json::to_string(&value).unwrap_or_else(|_| r#"{"ok":false}"#.to_string())
}

/// Board controller for WASM - wraps BoardEngine with JS-friendly API
#[wasm_bindgen]
pub struct BoardController {
    engine: BoardEngine,
}

#[wasm_bindgen]
impl BoardController {
    /// Create a controller, restoring saved cards from `localStorage`
    ///
    /// `config_json` may override any subset of the board configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Self {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
        crate::console::init(log::LevelFilter::Info);

        let config = match config_json.as_deref().map(BoardConfig::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::warn!("ignoring invalid config: {}", e);
                BoardConfig::default()
            }
            None => BoardConfig::default(),
        };

        let mut engine = BoardEngine::new(config)
            .with_storage(Box::new(LocalStorage::new()))
            .with_player_backend(Box::new(YouTubeBackend));
        engine.restore();
        Self { engine }
    }

    /// Update clamp bounds after a window resize
    #[wasm_bindgen]
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.engine.set_viewport(width, height);
    }

    // =========================================================================
    // Cards
    // =========================================================================

    /// Get all cards as JSON, back to front
    #[wasm_bindgen]
    pub fn get_cards_json(&self) -> String {
        let cards: Vec<CardView> = self
            .engine
            .cards()
            .cards_by_z()
            .into_iter()
            .map(CardView::new)
            .collect();
        serde_json::to_string(&cards).unwrap_or_else(|_| "[]".to_string())
    }

    /// Add a card from a pasted id or link
    ///
    /// Returns `{"ok":true,"id":N}` or `{"ok":false,"error":"..."}`.
    #[wasm_bindgen]
    pub fn add_card(&mut self, input: &str) -> String {
        added_json(self.engine.add_card_from_input(input))
    }

    /// Add a card from clipboard text; a rejection opens the input panel
    #[wasm_bindgen]
    pub fn paste_reference(&mut self, text: &str) -> String {
        added_json(self.engine.paste_reference(text))
    }

    #[wasm_bindgen]
    pub fn delete_card(&mut self, id: u64) -> bool {
        self.engine.delete_card(id)
    }

    /// Start deleting; true when the host should show a confirmation
    #[wasm_bindgen]
    pub fn request_delete(&mut self, id: u64) -> bool {
        self.engine.request_delete(id)
    }

    #[wasm_bindgen]
    pub fn confirm_delete(&mut self) -> bool {
        self.engine.confirm_delete()
    }

    #[wasm_bindgen]
    pub fn cancel_delete(&mut self) {
        self.engine.cancel_delete();
    }

    #[wasm_bindgen]
    pub fn pending_delete(&self) -> Option<u64> {
        self.engine.pending_delete()
    }

    #[wasm_bindgen]
    pub fn focus_card(&mut self, id: u64) -> bool {
        self.engine.focus_card(id)
    }

    /// Flip a card's lock; returns the new state
    #[wasm_bindgen]
    pub fn toggle_lock(&mut self, id: u64) -> Option<bool> {
        self.engine.toggle_lock(id)
    }

    /// Flip a card's fullscreen state; returns the new state
    #[wasm_bindgen]
    pub fn toggle_fullscreen(&mut self, id: u64) -> Option<bool> {
        self.engine.toggle_fullscreen(id)
    }

    /// Watch URL for the clipboard
    #[wasm_bindgen]
    pub fn copy_reference(&self, id: u64) -> Option<String> {
        self.engine.copy_reference(id)
    }

    /// Feed back a card's `getBoundingClientRect()`
    #[wasm_bindgen]
    pub fn report_rendered_bounds(&mut self, id: u64, x: f32, y: f32, width: f32, height: f32) -> bool {
        self.engine.report_rendered_bounds(id, x, y, width, height)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Start move drag
    #[wasm_bindgen]
    pub fn start_move_drag(&mut self, id: u64, x: f32, y: f32) -> bool {
        self.engine.start_move_drag(id, x, y)
    }

    /// Start resize drag from `"nw"`, `"ne"`, `"sw"` or `"se"`
    #[wasm_bindgen]
    pub fn start_resize_drag(&mut self, id: u64, direction: &str, x: f32, y: f32) -> bool {
        self.engine.start_resize_drag(id, direction, x, y)
    }

    /// Handle pointer down event
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32, button: u8) -> String {
        let result = self.engine.handle_pointer_down(x, y, button);
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle pointer move event
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_move(x, y);
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle pointer up event
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        let result = self.engine.handle_pointer_up();
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// CSS cursor for the point under the pointer
    #[wasm_bindgen]
    pub fn cursor_at(&self, x: f32, y: f32) -> String {
        self.engine
            .region_at(x, y)
            .map_or("default", |(_, region)| region.cursor())
            .to_string()
    }

    /// Handle key down; returns the shortcut name if one applied
    #[wasm_bindgen]
    pub fn key_down(&mut self, key: &str, command: bool, shift: bool) -> Option<String> {
        let action = self.engine.handle_key(key, command, shift)?;
        serde_json::to_value(action)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
    }

    // =========================================================================
    // Surface
    // =========================================================================

    #[wasm_bindgen]
    pub fn get_overlay_json(&self) -> String {
        serde_json::to_string(self.engine.overlay()).unwrap_or_else(|_| "{}".to_string())
    }

    #[wasm_bindgen]
    pub fn get_panel_json(&self) -> String {
        serde_json::to_string(self.engine.panel()).unwrap_or_else(|_| "{}".to_string())
    }

    #[wasm_bindgen]
    pub fn toggle_panel(&mut self) {
        self.engine.toggle_panel();
    }

    #[wasm_bindgen]
    pub fn close_panel(&mut self) {
        self.engine.close_panel();
    }

    #[wasm_bindgen]
    pub fn set_panel_text(&mut self, text: &str) {
        self.engine.set_panel_text(text);
    }

    /// Submit the panel; returns the new card id, or None if rejected
    #[wasm_bindgen]
    pub fn submit_panel(&mut self) -> Option<u64> {
        self.engine.submit_panel()
    }

    // =========================================================================
    // Playback
    // =========================================================================

    #[wasm_bindgen]
    pub fn toggle_playback(&mut self, id: u64) -> bool {
        self.engine.toggle_playback(id)
    }

    #[wasm_bindgen]
    pub fn seek_fraction(&mut self, id: u64, fraction: f64) -> bool {
        self.engine.seek_fraction(id, fraction)
    }

    #[wasm_bindgen]
    pub fn set_volume(&mut self, id: u64, volume: u8) -> bool {
        self.engine.set_volume(id, volume)
    }

    #[wasm_bindgen]
    pub fn toggle_mute(&mut self, id: u64) -> bool {
        self.engine.toggle_mute(id)
    }

    /// Get a card's transport status as JSON, or `null`
    #[wasm_bindgen]
    pub fn get_transport_json(&self, id: u64) -> String {
        serde_json::to_string(&self.engine.transport_status(id)).unwrap_or_else(|_| "null".to_string())
    }

    /// Drive player readiness and transport polling from the frame loop
    ///
    /// Returns the ids whose transport status changed, as a JSON array.
    #[wasm_bindgen]
    pub fn tick(&mut self, now_ms: f64) -> String {
        let updated = self.engine.tick(now_ms);
        serde_json::to_string(&updated).unwrap_or_else(|_| "[]".to_string())
    }
}
