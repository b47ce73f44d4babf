//! Card lifecycle and per-card controls

use crate::card::{CardId, CardOptions};
use crate::content::ContentRef;
use crate::error::ContentError;
use crate::math::Rect;
use crate::player::PlayerCommand;
use super::BoardEngine;

impl BoardEngine {
    /// Create a card at the default spawn point, on top of every other card
    pub fn create_card(&mut self, content: ContentRef) -> CardId {
        let id = self.spawn_card(content, CardOptions::default());
        self.save();
        id
    }

    /// Create a card with explicit placement
    pub fn create_card_with(&mut self, content: ContentRef, options: CardOptions) -> CardId {
        let id = self.spawn_card(content, options);
        self.save();
        id
    }

    /// Parse free-form input and create a card from it
    ///
    /// Nothing changes when the input is rejected.
    pub fn add_card_from_input(&mut self, input: &str) -> Result<CardId, ContentError> {
        let content = ContentRef::parse(input).map_err(|e| {
            log::info!("rejected content input: {}", e);
            e
        })?;
        Ok(self.create_card(content))
    }

    /// Delete a card, releasing its player
    ///
    /// Absent cards are ignored. Returns true when a card was removed.
    pub fn delete_card(&mut self, id: CardId) -> bool {
        if self.gestures.targets(id) {
            self.gestures.end();
            self.overlay.clear();
        }
        if self.pending_delete == Some(id) {
            self.pending_delete = None;
        }
        if let Some(slot) = self.players.remove(&id) {
            slot.destroy();
        }

        if self.cards.destroy(id).is_none() {
            return false;
        }
        log::debug!("deleted card {}", id);
        self.save();
        true
    }

    /// Start deleting a card
    ///
    /// With confirmation enabled the card is only marked and true is returned;
    /// otherwise it is deleted immediately and false is returned.
    pub fn request_delete(&mut self, id: CardId) -> bool {
        if !self.cards.contains(id) {
            return false;
        }
        if self.config.confirm_delete {
            self.pending_delete = Some(id);
            return true;
        }
        self.delete_card(id);
        false
    }

    /// Card awaiting delete confirmation
    #[inline]
    pub fn pending_delete(&self) -> Option<CardId> {
        self.pending_delete
    }

    /// Delete the card awaiting confirmation
    pub fn confirm_delete(&mut self) -> bool {
        match self.pending_delete.take() {
            Some(id) => self.delete_card(id),
            None => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Bring a card to the front and persist the new stacking
    ///
    /// Locked and fullscreen cards keep their z-order.
    pub fn focus_card(&mut self, id: CardId) -> bool {
        match self.cards.get(id) {
            Some(card) if card.is_interactive() => {}
            _ => return false,
        }
        if !self.cards.bring_to_front(id) {
            return false;
        }
        self.save();
        true
    }

    /// Lock or unlock a card; unlocking raises it to the front
    pub fn set_locked(&mut self, id: CardId, locked: bool) -> bool {
        if !self.cards.set_locked(id, locked) {
            return false;
        }
        if locked && self.gestures.targets(id) {
            self.gestures.end();
            self.overlay.clear();
        }
        self.save();
        true
    }

    /// Flip a card's lock, returning the new state
    pub fn toggle_lock(&mut self, id: CardId) -> Option<bool> {
        let locked = !self.cards.get(id)?.is_locked();
        self.set_locked(id, locked);
        Some(locked)
    }

    /// Enter or leave fullscreen, returning the new state
    ///
    /// Fullscreen is not persisted; snapshots keep the arranged rectangle.
    /// Locked cards stay arranged, but a card locked while fullscreen can
    /// still leave it.
    pub fn toggle_fullscreen(&mut self, id: CardId) -> Option<bool> {
        let was_fullscreen = self.cards.get(id)?.is_fullscreen();
        if self.gestures.targets(id) {
            self.gestures.end();
            self.overlay.clear();
        }
        let bounds = Rect::new(0.0, 0.0, self.viewport.width, self.viewport.height);
        let fullscreen = self.cards.toggle_fullscreen(id, bounds)?;
        if fullscreen == was_fullscreen {
            return Some(fullscreen);
        }

        if let Some(size) = self.cards.get(id).map(|c| c.size()) {
            self.dispatch(id, PlayerCommand::SetSize(size));
        }
        Some(fullscreen)
    }

    /// Canonical URL of a card's content, for the clipboard
    pub fn copy_reference(&self, id: CardId) -> Option<String> {
        self.cards.get(id).map(|c| c.content().watch_url())
    }

    /// Adopt the bounds the host actually rendered for a card
    ///
    /// Ignored while a gesture targets the card, and for locked or
    /// fullscreen cards.
    pub fn report_rendered_bounds(&mut self, id: CardId, x: f32, y: f32, width: f32, height: f32) -> bool {
        if self.gestures.targets(id) {
            return false;
        }
        match self.cards.get(id) {
            Some(card) if card.is_interactive() => {}
            _ => return false,
        }
        self.cards.set_rect(id, Rect::new(x, y, width, height))
    }
}
