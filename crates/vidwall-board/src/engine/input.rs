//! Input handling for pointer events and drag operations

use crate::card::{CardId, CardRegion, ResizeHandle};
use crate::input::{calculate_drag, calculate_resize, Gesture, InputResult, ShortcutAction};
use crate::math::{Size, Vec2};
use crate::player::PlayerCommand;
use super::{format_size, BoardEngine};

/// Primary (left) pointer button
const PRIMARY_BUTTON: u8 = 0;

impl BoardEngine {
    /// Start move drag
    ///
    /// Refused when the card is absent, locked or fullscreen, or another
    /// gesture is active. The card is raised immediately but the new stacking
    /// is only persisted on release.
    pub fn start_move_drag(&mut self, id: CardId, x: f32, y: f32) -> bool {
        if !self.gestures.is_idle() {
            return false;
        }
        let position = match self.cards.get(id) {
            Some(card) if card.is_interactive() => card.position(),
            _ => return false,
        };

        self.cards.bring_to_front(id);
        self.gestures.start_drag(id, Vec2::new(x, y) - position)
    }

    /// Start resize drag from a corner (`"nw"`, `"ne"`, `"sw"`, `"se"`)
    pub fn start_resize_drag(&mut self, id: CardId, direction: &str, x: f32, y: f32) -> bool {
        match ResizeHandle::parse(direction) {
            Some(handle) => self.start_resize(id, handle, Vec2::new(x, y)),
            None => false,
        }
    }

    fn start_resize(&mut self, id: CardId, handle: ResizeHandle, pointer: Vec2) -> bool {
        if !self.gestures.is_idle() {
            return false;
        }
        let rect = match self.cards.get(id) {
            Some(card) if card.is_interactive() => card.rect(),
            _ => return false,
        };

        self.cards.bring_to_front(id);
        if !self.gestures.start_resize(id, handle, pointer, rect) {
            return false;
        }
        self.overlay.show_grid = true;
        true
    }

    /// Handle pointer down
    ///
    /// Only the primary button is routed; the press goes to the topmost card
    /// under the pointer.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32, button: u8) -> InputResult {
        if button != PRIMARY_BUTTON || !self.gestures.is_idle() {
            return InputResult::Unhandled;
        }

        let (id, region) = match self.region_at(x, y) {
            Some(hit) => hit,
            None => return InputResult::Unhandled,
        };

        match region {
            CardRegion::MoveHandle => {
                self.start_move_drag(id, x, y);
                InputResult::Handled
            }
            CardRegion::Resize(handle) => {
                self.start_resize(id, handle, Vec2::new(x, y));
                InputResult::Handled
            }
            CardRegion::LockButton => {
                self.toggle_lock(id);
                InputResult::Handled
            }
            CardRegion::CopyButton => match self.copy_reference(id) {
                Some(text) => InputResult::Copy { card_id: id, text },
                None => InputResult::Unhandled,
            },
            CardRegion::FullscreenButton => {
                self.toggle_fullscreen(id);
                InputResult::Handled
            }
            CardRegion::DeleteButton => {
                if self.request_delete(id) {
                    InputResult::ConfirmDelete { card_id: id }
                } else {
                    InputResult::Handled
                }
            }
            CardRegion::Body => self.handle_body_press(id, Vec2::new(x, y)),
        }
    }

    /// Press on the card body focuses it and lets the player have the event
    fn handle_body_press(&mut self, id: CardId, pos: Vec2) -> InputResult {
        self.focus_card(id);
        match self.cards.get(id) {
            Some(card) => {
                let local = pos - card.position();
                InputResult::Forward {
                    card_id: id,
                    local_x: local.x,
                    local_y: local.y,
                }
            }
            None => InputResult::Unhandled,
        }
    }

    /// Handle pointer move
    ///
    /// Listens board-wide, so the pointer may be anywhere. If the target card
    /// was deleted mid-gesture the gesture is dropped.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let gesture = match self.gestures.gesture() {
            Some(gesture) => gesture.clone(),
            None => return InputResult::Unhandled,
        };

        let size = match self.cards.get(gesture.card_id()) {
            Some(card) => card.size(),
            None => {
                self.gestures.end();
                self.overlay.clear();
                return InputResult::Unhandled;
            }
        };

        let pointer = Vec2::new(x, y);
        let limits = self.limits();
        match gesture {
            Gesture::Dragging { card_id, offset } => {
                let position = calculate_drag(pointer, offset, size, &limits);
                self.cards.move_card(card_id, position);
            }
            Gesture::Resizing { card_id, handle, start_pointer, start_rect } => {
                let rect = calculate_resize(
                    card_id,
                    handle,
                    start_rect,
                    pointer - start_pointer,
                    self.cards.sizes(),
                    &limits,
                );
                self.cards.set_rect(card_id, rect);
                self.overlay.size_readout = Some(format_size(rect.size()));
                self.dispatch(card_id, PlayerCommand::SetSize(rect.size()));
            }
        }
        InputResult::Handled
    }

    /// Handle pointer up
    ///
    /// Release always commits; the settled state is persisted.
    pub fn handle_pointer_up(&mut self) -> InputResult {
        if self.gestures.end().is_none() {
            return InputResult::Unhandled;
        }
        self.overlay.clear();
        self.save();
        InputResult::Handled
    }

    /// Handle a key press, applying the shortcut it maps to
    ///
    /// `Paste` is returned for the host to read the clipboard and call
    /// [`paste_reference`](Self::paste_reference).
    pub fn handle_key(&mut self, key: &str, command: bool, shift: bool) -> Option<ShortcutAction> {
        let action = ShortcutAction::from_key(key, command, shift, self.panel.open)?;
        match action {
            ShortcutAction::TogglePanel => self.toggle_panel(),
            ShortcutAction::Dismiss => {
                self.close_panel();
                self.cancel_delete();
            }
            ShortcutAction::Paste => {}
        }
        Some(action)
    }

    /// Current size of a card being resized, for hosts that size the player themselves
    pub fn gesture_size(&self) -> Option<Size> {
        let id = self.gesture_target()?;
        self.cards.get(id).map(|c| c.size())
    }
}
