//! Player adapter boundary
//!
//! The engine never talks to a third-party player directly. A
//! [`PlayerBackend`] instantiates one [`PlayerHandle`] per card and the engine
//! wraps it in a [`PlayerSlot`], which queues commands until the player is
//! ready and swallows every failure.

mod slot;
mod transport;

pub use slot::{PlayerSlot, MAX_PENDING_COMMANDS};
pub use transport::{TransportPoller, TransportStatus};

use serde::Serialize;
use crate::card::CardId;
use crate::content::ContentRef;
use crate::error::PlayerError;
use crate::math::Size;

/// Playback state reported by the embedded player
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    #[default]
    Unstarted,
    Playing,
    Paused,
    Buffering,
    Ended,
    Cued,
}

/// Transport command issued by the engine or the control overlay
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlayerCommand {
    SetSize(Size),
    Play,
    Pause,
    /// Seek to an absolute position in seconds
    SeekTo(f64),
    /// Volume in percent (0-100)
    SetVolume(u8),
    Mute,
    Unmute,
}

/// One embedded player instance
///
/// Any call may fail, including after `is_ready` returned true.
pub trait PlayerHandle {
    /// Whether the player finished its asynchronous initialization
    fn is_ready(&self) -> bool;

    fn set_size(&mut self, size: Size) -> Result<(), PlayerError>;
    fn play(&mut self) -> Result<(), PlayerError>;
    fn pause(&mut self) -> Result<(), PlayerError>;
    fn state(&self) -> Result<PlaybackState, PlayerError>;
    fn seek_to(&mut self, seconds: f64) -> Result<(), PlayerError>;
    fn duration(&self) -> Result<f64, PlayerError>;
    fn current_time(&self) -> Result<f64, PlayerError>;
    /// Loaded fraction of the video (0.0-1.0)
    fn buffered_fraction(&self) -> Result<f64, PlayerError>;
    fn set_volume(&mut self, volume: u8) -> Result<(), PlayerError>;
    fn mute(&mut self) -> Result<(), PlayerError>;
    fn unmute(&mut self) -> Result<(), PlayerError>;
    fn is_muted(&self) -> Result<bool, PlayerError>;

    /// Release the player; must not fail
    fn destroy(&mut self);
}

/// Factory for player handles
pub trait PlayerBackend {
    /// Embed `content` for `card` at the given size
    fn instantiate(
        &mut self,
        card: CardId,
        content: &ContentRef,
        size: Size,
    ) -> Result<Box<dyn PlayerHandle>, PlayerError>;
}

/// Backend for hosts that render no players (headless use, tests)
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPlayerBackend;

impl PlayerBackend for NullPlayerBackend {
    fn instantiate(
        &mut self,
        _card: CardId,
        _content: &ContentRef,
        _size: Size,
    ) -> Result<Box<dyn PlayerHandle>, PlayerError> {
        Ok(Box::new(NullPlayer::default()))
    }
}

/// Player that is always ready and remembers only what it was told
#[derive(Debug, Default)]
struct NullPlayer {
    state: PlaybackState,
    muted: bool,
}

impl PlayerHandle for NullPlayer {
    fn is_ready(&self) -> bool {
        true
    }

    fn set_size(&mut self, _size: Size) -> Result<(), PlayerError> {
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        self.state = PlaybackState::Playing;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        self.state = PlaybackState::Paused;
        Ok(())
    }

    fn state(&self) -> Result<PlaybackState, PlayerError> {
        Ok(self.state)
    }

    fn seek_to(&mut self, _seconds: f64) -> Result<(), PlayerError> {
        Ok(())
    }

    fn duration(&self) -> Result<f64, PlayerError> {
        Ok(0.0)
    }

    fn current_time(&self) -> Result<f64, PlayerError> {
        Ok(0.0)
    }

    fn buffered_fraction(&self) -> Result<f64, PlayerError> {
        Ok(0.0)
    }

    fn set_volume(&mut self, _volume: u8) -> Result<(), PlayerError> {
        Ok(())
    }

    fn mute(&mut self) -> Result<(), PlayerError> {
        self.muted = true;
        Ok(())
    }

    fn unmute(&mut self) -> Result<(), PlayerError> {
        self.muted = false;
        Ok(())
    }

    fn is_muted(&self) -> Result<bool, PlayerError> {
        Ok(self.muted)
    }

    fn destroy(&mut self) {}
}
