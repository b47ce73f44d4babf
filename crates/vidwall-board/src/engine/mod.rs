//! Board engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `cards`: Card lifecycle, locking, fullscreen and deletion
//! - `input`: Pointer and keyboard handling, drag/resize gestures
//! - `playback`: Player control overlay and transport polling
//! - `surface`: Input panel and live overlay state

mod cards;
mod input;
mod playback;
mod surface;

use std::collections::BTreeMap;
use crate::card::{CardId, CardOptions, CardRegion, CardRegistry};
use crate::config::BoardConfig;
use crate::content::ContentRef;
use crate::input::{GestureLimits, GestureRouter};
use crate::math::{Size, Vec2};
use crate::persistence::{PersistenceAdapter, Storage};
use crate::player::{NullPlayerBackend, PlayerBackend, PlayerSlot};

pub use surface::{format_size, InputPanel, Overlay};

/// Board engine coordinating all board components
///
/// This is the main entry point for board operations, managing:
/// - Card registry (lifecycle, z-order, locking, hit testing)
/// - Gesture router (drag/resize state machine)
/// - One player slot per card
/// - Persistence snapshots after every settled change
/// - Input panel and overlay state for the host to render
pub struct BoardEngine {
    pub(crate) config: BoardConfig,
    pub(crate) cards: CardRegistry,
    pub(crate) gestures: GestureRouter,
    /// Clamp bounds for gestures, and fullscreen bounds
    pub(crate) viewport: Size,
    pub(crate) players: BTreeMap<CardId, PlayerSlot>,
    pub(crate) backend: Box<dyn PlayerBackend>,
    pub(crate) persistence: Option<PersistenceAdapter>,
    pub(crate) overlay: Overlay,
    pub(crate) panel: InputPanel,
    /// Card waiting for delete confirmation
    pub(crate) pending_delete: Option<CardId>,
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl BoardEngine {
    /// Create an engine with no storage and no visible players
    pub fn new(config: BoardConfig) -> Self {
        Self {
            cards: CardRegistry::new(&config),
            gestures: GestureRouter::new(),
            viewport: config.viewport,
            players: BTreeMap::new(),
            backend: Box::new(NullPlayerBackend),
            persistence: None,
            overlay: Overlay::default(),
            panel: InputPanel::default(),
            pending_delete: None,
            config,
        }
    }

    /// Persist snapshots into `storage` under the configured key
    pub fn with_storage(mut self, storage: Box<dyn Storage>) -> Self {
        self.persistence = Some(PersistenceAdapter::new(storage, self.config.storage_key.clone()));
        self
    }

    /// Embed players through `backend`
    pub fn with_player_backend(mut self, backend: Box<dyn PlayerBackend>) -> Self {
        self.backend = backend;
        self
    }

    /// Replay the saved card list through card creation
    ///
    /// The z-order counter is seeded from the saved maximum first, so cards
    /// created afterwards land above every restored card. Returns the number
    /// of cards restored.
    pub fn restore(&mut self) -> usize {
        let records = match &self.persistence {
            Some(persistence) => persistence.load_all(),
            None => return 0,
        };

        let max_z = records.iter().filter_map(|r| r.z_order).max().unwrap_or(0);
        self.cards.seed_z(max_z);

        let mut restored = 0;
        for record in &records {
            if let Some(content) = record.content() {
                let options = record.options(&self.config);
                self.spawn_card(content, options);
                restored += 1;
            }
        }
        log::info!("restored {} cards", restored);
        restored
    }

    /// Get the configuration in use
    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Get the card registry
    #[inline]
    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    #[inline]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Update the clamp bounds after the page was resized
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Size::new(width.max(0.0), height.max(0.0));
    }

    /// Find which region of which card is at a page position
    pub fn region_at(&self, x: f32, y: f32) -> Option<(CardId, CardRegion)> {
        self.cards.region_at(Vec2::new(x, y))
    }

    /// Whether a drag or resize is in progress
    #[inline]
    pub fn is_gesture_active(&self) -> bool {
        !self.gestures.is_idle()
    }

    /// Card targeted by the active gesture
    pub fn gesture_target(&self) -> Option<CardId> {
        self.gestures.gesture().map(|g| g.card_id())
    }

    pub(crate) fn limits(&self) -> GestureLimits {
        GestureLimits::new(&self.config, self.viewport)
    }

    /// The creation path shared by interactive creation and restore
    pub(crate) fn spawn_card(&mut self, content: ContentRef, options: CardOptions) -> CardId {
        let id = self.cards.create(content.clone(), options);
        let size = self.cards.get(id).map(|c| c.size()).unwrap_or(self.config.default_size);

        match self.backend.instantiate(id, &content, size) {
            Ok(handle) => {
                self.players.insert(id, PlayerSlot::new(handle, self.config.transport_poll_ms));
            }
            Err(e) => log::warn!("card {} has no player: {}", id, e),
        }

        log::debug!("created card {} for {}", id, content);
        id
    }

    /// Snapshot the registry if persistence is configured
    pub(crate) fn save(&mut self) {
        if let Some(persistence) = self.persistence.as_mut() {
            persistence.save_all(&self.cards);
        }
    }
}
