//! Per-card player wrapper

use std::collections::VecDeque;
use crate::error::PlayerError;
use super::{PlaybackState, PlayerCommand, PlayerHandle, TransportPoller, TransportStatus};

/// Commands kept while the player is still initializing
pub const MAX_PENDING_COMMANDS: usize = 16;

/// A card's player handle plus its pending commands and transport poller
pub struct PlayerSlot {
    handle: Box<dyn PlayerHandle>,
    pending: VecDeque<PlayerCommand>,
    ready: bool,
    poller: TransportPoller,
    status: TransportStatus,
}

impl PlayerSlot {
    /// Wrap a freshly instantiated handle
    pub fn new(handle: Box<dyn PlayerHandle>, poll_interval_ms: f64) -> Self {
        Self {
            handle,
            pending: VecDeque::new(),
            ready: false,
            poller: TransportPoller::new(poll_interval_ms),
            status: TransportStatus::default(),
        }
    }

    /// Whether readiness has been observed
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Last sampled transport state
    #[inline]
    pub fn status(&self) -> &TransportStatus {
        &self.status
    }

    /// Number of commands waiting for readiness
    #[inline]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Send a command, queueing it if the player is not ready yet
    pub fn dispatch(&mut self, command: PlayerCommand) {
        if !self.observe_ready() {
            self.enqueue(command);
            return;
        }
        self.apply(command);
    }

    /// Play if paused or stopped, pause if playing
    pub fn toggle_playback(&mut self) {
        let state = if self.observe_ready() {
            self.handle.state().unwrap_or(self.status.state)
        } else {
            self.status.state
        };
        let command = match state {
            PlaybackState::Playing | PlaybackState::Buffering => PlayerCommand::Pause,
            _ => PlayerCommand::Play,
        };
        self.dispatch(command);
    }

    /// Advance readiness detection and transport polling
    ///
    /// Returns true when the transport status was resampled.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !self.poller.is_running() {
            if !self.observe_ready() {
                return false;
            }
            self.poller.start(now_ms);
        }
        if !self.poller.poll(now_ms) {
            return false;
        }
        self.refresh_status();
        true
    }

    /// Stop polling, drop queued commands and release the player
    pub fn destroy(mut self) {
        self.poller.cancel();
        self.pending.clear();
        self.handle.destroy();
    }

    /// Latch readiness and flush the queue the first time it is seen
    fn observe_ready(&mut self) -> bool {
        if self.ready {
            return true;
        }
        if !self.handle.is_ready() {
            return false;
        }
        self.ready = true;
        while let Some(command) = self.pending.pop_front() {
            self.apply(command);
        }
        true
    }

    fn enqueue(&mut self, command: PlayerCommand) {
        if matches!(command, PlayerCommand::SetSize(_)) {
            self.pending.retain(|c| !matches!(c, PlayerCommand::SetSize(_)));
        }
        if self.pending.len() >= MAX_PENDING_COMMANDS {
            self.pending.pop_front();
        }
        self.pending.push_back(command);
    }

    fn apply(&mut self, command: PlayerCommand) {
        let result = match command {
            PlayerCommand::SetSize(size) => self.handle.set_size(size),
            PlayerCommand::Play => self.handle.play(),
            PlayerCommand::Pause => self.handle.pause(),
            PlayerCommand::SeekTo(seconds) => self.handle.seek_to(seconds),
            PlayerCommand::SetVolume(volume) => self.handle.set_volume(volume.min(100)),
            PlayerCommand::Mute => self.handle.mute(),
            PlayerCommand::Unmute => self.handle.unmute(),
        };
        if let Err(e) = result {
            log::debug!("player command {:?} failed: {}", command, e);
        }
    }

    /// Resample each field independently, keeping the previous value on failure
    fn refresh_status(&mut self) {
        fn keep<T>(field: &str, result: Result<T, PlayerError>, previous: T) -> T {
            result.unwrap_or_else(|e| {
                log::debug!("player {} unavailable: {}", field, e);
                previous
            })
        }

        let previous = self.status;
        self.status = TransportStatus {
            state: keep("state", self.handle.state(), previous.state),
            current_time: keep("current time", self.handle.current_time(), previous.current_time),
            duration: keep("duration", self.handle.duration(), previous.duration),
            buffered: keep("buffered fraction", self.handle.buffered_fraction(), previous.buffered),
            muted: keep("mute state", self.handle.is_muted(), previous.muted),
        };
    }
}
