//! Player control overlay and transport polling
//!
//! Every call here is best-effort: a missing or failing player never
//! affects the layout.

use crate::card::CardId;
use crate::player::{PlayerCommand, TransportStatus};
use super::BoardEngine;

impl BoardEngine {
    /// Send a command to a card's player; false if the card has no player
    pub(crate) fn dispatch(&mut self, id: CardId, command: PlayerCommand) -> bool {
        match self.players.get_mut(&id) {
            Some(slot) => {
                slot.dispatch(command);
                true
            }
            None => false,
        }
    }

    /// Play if paused, pause if playing
    pub fn toggle_playback(&mut self, id: CardId) -> bool {
        match self.players.get_mut(&id) {
            Some(slot) => {
                slot.toggle_playback();
                true
            }
            None => false,
        }
    }

    /// Seek to a fraction (0.0-1.0) of the last known duration
    pub fn seek_fraction(&mut self, id: CardId, fraction: f64) -> bool {
        let duration = match self.players.get(&id) {
            Some(slot) => slot.status().duration,
            None => return false,
        };
        if duration <= 0.0 {
            return false;
        }
        let seconds = fraction.clamp(0.0, 1.0) * duration;
        self.dispatch(id, PlayerCommand::SeekTo(seconds))
    }

    /// Set volume in percent; values above 100 are capped
    pub fn set_volume(&mut self, id: CardId, volume: u8) -> bool {
        self.dispatch(id, PlayerCommand::SetVolume(volume.min(100)))
    }

    /// Mute or unmute based on the last sampled state
    pub fn toggle_mute(&mut self, id: CardId) -> bool {
        let muted = match self.players.get(&id) {
            Some(slot) => slot.status().muted,
            None => return false,
        };
        let command = if muted {
            PlayerCommand::Unmute
        } else {
            PlayerCommand::Mute
        };
        self.dispatch(id, command)
    }

    /// Last sampled transport state of a card's player
    pub fn transport_status(&self, id: CardId) -> Option<TransportStatus> {
        self.players.get(&id).map(|slot| *slot.status())
    }

    /// Advance readiness detection and transport polling
    ///
    /// Returns the cards whose transport status was resampled.
    pub fn tick(&mut self, now_ms: f64) -> Vec<CardId> {
        self.players
            .iter_mut()
            .filter_map(|(&id, slot)| slot.tick(now_ms).then_some(id))
            .collect()
    }
}
