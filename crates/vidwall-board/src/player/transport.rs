//! Transport-status polling
//!
//! The host calls `tick(now_ms)` from its animation frame loop; each ready
//! player is sampled at most once per interval. The poller lives inside the
//! card's [`PlayerSlot`](super::PlayerSlot), so dropping the card stops it.

use serde::Serialize;
use super::PlaybackState;

/// Last sampled transport state of one player, for the control overlay
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportStatus {
    pub state: PlaybackState,
    pub current_time: f64,
    pub duration: f64,
    pub buffered: f64,
    pub muted: bool,
}

impl TransportStatus {
    /// Playback progress as a fraction of the duration
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Fixed-interval scheduler driven by injected time
#[derive(Clone, Debug)]
pub struct TransportPoller {
    interval_ms: f64,
    next_due_ms: Option<f64>,
}

impl TransportPoller {
    /// Create a stopped poller
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            next_due_ms: None,
        }
    }

    /// Start polling; the first sample is due immediately
    pub fn start(&mut self, now_ms: f64) {
        self.next_due_ms = Some(now_ms);
    }

    /// Stop polling
    pub fn cancel(&mut self) {
        self.next_due_ms = None;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Check whether a sample is due, and if so schedule the next one
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.next_due_ms {
            Some(due) if now_ms >= due => {
                self.next_due_ms = Some(now_ms + self.interval_ms);
                true
            }
            _ => false,
        }
    }
}
