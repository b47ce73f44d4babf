//! Card registry for lifecycle, z-order and hit testing

use std::collections::BTreeMap;
use crate::config::BoardConfig;
use crate::content::ContentRef;
use crate::math::{Rect, Size, Vec2};
use super::{Card, CardId, CardOptions, CardRegion, ResizeHandle};

/// The live set of cards plus the stacking counter
///
/// Cards are kept in creation order (ids are monotonic), which is the order
/// sibling-size snapping scans them in. Visual stacking is governed solely by
/// `z_order`.
pub struct CardRegistry {
    /// All live cards by ID
    cards: BTreeMap<CardId, Card>,
    /// Next card ID
    next_id: CardId,
    /// Highest z-order handed out so far (never decreases)
    next_z: u32,
    default_position: Vec2,
    default_size: Size,
    min_size: Size,
}

impl Default for CardRegistry {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}

impl CardRegistry {
    /// Create an empty registry using the config's spawn defaults and minimum size
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            cards: BTreeMap::new(),
            next_id: 1,
            next_z: 0,
            default_position: config.default_position,
            default_size: config.default_size,
            min_size: config.min_size,
        }
    }

    /// Create a card and register it as live
    ///
    /// A requested z-order is kept when it does not exceed the current
    /// maximum; otherwise the card is raised to a new front value.
    pub fn create(&mut self, content: ContentRef, options: CardOptions) -> CardId {
        let id = self.next_id;
        self.next_id += 1;

        let z_order = match options.z_order {
            Some(z) if z <= self.next_z => z,
            _ => self.raise_counter(),
        };

        let card = Card {
            id,
            content,
            position: options.position.unwrap_or(self.default_position),
            size: options.size.unwrap_or(self.default_size).at_least(self.min_size),
            z_order,
            locked: options.locked,
            restore_rect: None,
        };

        self.cards.insert(id, card);
        id
    }

    /// Remove a card; absent cards are ignored
    pub fn destroy(&mut self, id: CardId) -> Option<Card> {
        self.cards.remove(&id)
    }

    /// Get a card by ID
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Check whether a card is live
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Raise the seed so the next front value lands above `z`
    pub fn seed_z(&mut self, z: u32) {
        self.next_z = self.next_z.max(z);
    }

    /// Highest z-order handed out so far
    #[inline]
    pub fn max_z(&self) -> u32 {
        self.next_z
    }

    /// Renumber z-orders to `1..=n`, keeping the stacking
    pub fn compact_z(&mut self) {
        let mut order: Vec<(u32, CardId)> = self.cards.values().map(|c| (c.z_order, c.id)).collect();
        order.sort_unstable();

        let mut z = 0;
        for (_, id) in order {
            if let Some(card) = self.cards.get_mut(&id) {
                z += 1;
                card.z_order = z;
            }
        }
        self.next_z = z;
    }

    fn raise_counter(&mut self) -> u32 {
        self.next_z = match self.next_z.checked_add(1) {
            Some(z) => z,
            None => {
                log::debug!("z-order counter exhausted, compacting {} cards", self.cards.len());
                self.compact_z();
                self.next_z + 1
            }
        };
        self.next_z
    }

    /// Bring a card to the front
    ///
    /// Returns false (and changes nothing) when the card is absent or locked.
    pub fn bring_to_front(&mut self, id: CardId) -> bool {
        match self.cards.get(&id) {
            Some(card) if !card.locked => {}
            _ => return false,
        }
        let z = self.raise_counter();
        if let Some(card) = self.cards.get_mut(&id) {
            card.z_order = z;
        }
        true
    }

    /// Lock or unlock a card; unlocking also raises it to the front
    ///
    /// Returns true when the lock state actually changed.
    pub fn set_locked(&mut self, id: CardId, locked: bool) -> bool {
        let card = match self.cards.get_mut(&id) {
            Some(card) => card,
            None => return false,
        };
        if card.locked == locked {
            return false;
        }
        card.locked = locked;
        if !locked {
            self.bring_to_front(id);
        }
        true
    }

    /// Move a card; ignored when the card is absent or locked
    pub fn move_card(&mut self, id: CardId, position: Vec2) -> bool {
        match self.cards.get_mut(&id) {
            Some(card) if !card.locked => {
                card.position = position;
                true
            }
            _ => false,
        }
    }

    /// Set position and size together; size is raised to the minimum
    pub fn set_rect(&mut self, id: CardId, rect: Rect) -> bool {
        let min_size = self.min_size;
        match self.cards.get_mut(&id) {
            Some(card) if !card.locked => {
                card.position = rect.position();
                card.size = rect.size().at_least(min_size);
                true
            }
            _ => false,
        }
    }

    /// Enter fullscreen covering `bounds`, or leave it and restore the saved rectangle
    ///
    /// Returns the new fullscreen state, or None if the card is absent. A
    /// locked card cannot enter fullscreen but can always leave it.
    pub fn toggle_fullscreen(&mut self, id: CardId, bounds: Rect) -> Option<bool> {
        let card = self.cards.get_mut(&id)?;
        match card.restore_rect.take() {
            Some(restore) => {
                card.position = restore.position();
                card.size = restore.size();
                Some(false)
            }
            None if card.locked => Some(false),
            None => {
                card.restore_rect = Some(card.rect());
                card.position = bounds.position();
                card.size = bounds.size();
                Some(true)
            }
        }
    }

    /// Sizes of all live cards in creation order
    pub fn sizes(&self) -> impl Iterator<Item = (CardId, Size)> + '_ {
        self.cards.values().map(|c| (c.id, c.size))
    }

    /// All live cards in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Get cards sorted by z-order (back to front)
    pub fn cards_by_z(&self) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self.cards.values().collect();
        cards.sort_by_key(|c| (c.z_order, c.id));
        cards
    }

    /// The card currently on top, if any
    pub fn topmost(&self) -> Option<CardId> {
        self.cards_by_z().last().map(|c| c.id)
    }

    /// Find which region of which card is at a page position (topmost first)
    pub fn region_at(&self, pos: Vec2) -> Option<(CardId, CardRegion)> {
        self.cards_by_z()
            .into_iter()
            .rev()
            .find(|card| card.rect().contains(pos))
            .map(|card| (card.id, hit_test_card(card, pos)))
    }

    /// Get the number of live cards
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Check whether no cards are live
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

// =============================================================================
// Hit testing helper functions
// =============================================================================

/// Hit test a card known to contain `pos`
fn hit_test_card(card: &Card, pos: Vec2) -> CardRegion {
    if let Some(region) = hit_test_buttons(card, pos) {
        return region;
    }
    if card.is_fullscreen() {
        return CardRegion::Body;
    }
    if let Some(handle) = ResizeHandle::ALL
        .into_iter()
        .find(|&h| card.handle_rect(h).contains(pos))
    {
        return CardRegion::Resize(handle);
    }
    CardRegion::Body
}

/// Hit test the control strip
fn hit_test_buttons(card: &Card, pos: Vec2) -> Option<CardRegion> {
    CardRegion::BUTTONS
        .iter()
        .find(|(slot, _)| card.button_rect(*slot).contains(pos))
        .map(|(_, region)| *region)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video() -> ContentRef {
        ContentRef::parse("dQw4w9WgXcQ").unwrap()
    }

    fn at(x: f32, y: f32) -> CardOptions {
        CardOptions {
            position: Some(Vec2::new(x, y)),
            ..Default::default()
        }
    }

    #[test]
    fn test_card_creation_defaults() {
        let mut registry = CardRegistry::default();
        let id = registry.create(video(), CardOptions::default());

        let card = registry.get(id).unwrap();
        assert_eq!(card.position(), Vec2::new(100.0, 100.0));
        assert_eq!(card.size(), Size::new(320.0, 180.0));
        assert_eq!(card.z_order(), 1);
        assert!(!card.is_locked());
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_creation_enforces_min_size() {
        let mut registry = CardRegistry::default();
        let id = registry.create(
            video(),
            CardOptions {
                size: Some(Size::new(10.0, 10.0)),
                ..Default::default()
            },
        );
        assert_eq!(registry.get(id).unwrap().size(), Size::new(160.0, 90.0));
    }

    #[test]
    fn test_new_cards_land_on_top() {
        let mut registry = CardRegistry::default();
        let a = registry.create(video(), CardOptions::default());
        let b = registry.create(video(), CardOptions::default());
        assert!(registry.get(b).unwrap().z_order() > registry.get(a).unwrap().z_order());
        assert_eq!(registry.topmost(), Some(b));
    }

    #[test]
    fn test_requested_z_above_max_is_bumped() {
        let mut registry = CardRegistry::default();
        registry.create(video(), CardOptions::default());
        let id = registry.create(
            video(),
            CardOptions {
                z_order: Some(99),
                ..Default::default()
            },
        );
        assert_eq!(registry.get(id).unwrap().z_order(), 2);
    }

    #[test]
    fn test_requested_z_after_seed_is_kept() {
        let mut registry = CardRegistry::default();
        registry.seed_z(40);
        let id = registry.create(
            video(),
            CardOptions {
                z_order: Some(17),
                ..Default::default()
            },
        );
        assert_eq!(registry.get(id).unwrap().z_order(), 17);

        let fresh = registry.create(video(), CardOptions::default());
        assert_eq!(registry.get(fresh).unwrap().z_order(), 41);
    }

    #[test]
    fn test_exhausted_z_counter_compacts() {
        let mut registry = CardRegistry::default();
        registry.seed_z(u32::MAX);
        let low = registry.create(
            video(),
            CardOptions {
                z_order: Some(7),
                ..Default::default()
            },
        );
        let high = registry.create(
            video(),
            CardOptions {
                z_order: Some(u32::MAX),
                ..Default::default()
            },
        );

        let fresh = registry.create(video(), CardOptions::default());
        assert_eq!(registry.get(low).unwrap().z_order(), 1);
        assert_eq!(registry.get(high).unwrap().z_order(), 2);
        assert_eq!(registry.get(fresh).unwrap().z_order(), 3);
        assert_eq!(registry.topmost(), Some(fresh));

        assert!(registry.bring_to_front(low));
        assert_eq!(registry.get(low).unwrap().z_order(), 4);
    }

    #[test]
    fn test_bring_to_front_strictly_increases() {
        let mut registry = CardRegistry::default();
        let ids: Vec<CardId> = (0..4).map(|_| registry.create(video(), CardOptions::default())).collect();

        let mut seen = Vec::new();
        for &id in ids.iter().rev().chain(ids.iter()) {
            assert!(registry.bring_to_front(id));
            seen.push(registry.get(id).unwrap().z_order());
        }
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(registry.max_z(), *seen.last().unwrap());
    }

    #[test]
    fn test_locked_card_ignores_focus_and_moves() {
        let mut registry = CardRegistry::default();
        let id = registry.create(video(), at(100.0, 100.0));
        registry.create(video(), CardOptions::default());
        let z = registry.get(id).unwrap().z_order();

        assert!(registry.set_locked(id, true));
        assert!(!registry.bring_to_front(id));
        assert!(!registry.move_card(id, Vec2::new(500.0, 500.0)));
        assert!(!registry.set_rect(id, Rect::new(0.0, 0.0, 800.0, 450.0)));

        let card = registry.get(id).unwrap();
        assert_eq!(card.z_order(), z);
        assert_eq!(card.position(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_unlock_raises_to_front() {
        let mut registry = CardRegistry::default();
        let id = registry.create(video(), CardOptions::default());
        registry.create(video(), CardOptions::default());

        registry.set_locked(id, true);
        assert!(registry.set_locked(id, false));
        assert_eq!(registry.get(id).unwrap().z_order(), registry.max_z());
        assert_eq!(registry.topmost(), Some(id));
    }

    #[test]
    fn test_set_locked_same_state_is_noop() {
        let mut registry = CardRegistry::default();
        let id = registry.create(video(), CardOptions::default());
        let z = registry.max_z();
        assert!(!registry.set_locked(id, false));
        assert_eq!(registry.max_z(), z);
    }

    #[test]
    fn test_destroy_is_idempotent_and_ids_not_reused() {
        let mut registry = CardRegistry::default();
        let id = registry.create(video(), CardOptions::default());

        assert!(registry.destroy(id).is_some());
        assert!(!registry.contains(id));
        assert!(registry.destroy(id).is_none());

        let next = registry.create(video(), CardOptions::default());
        assert_ne!(next, id);
        assert!(next > id);
    }

    #[test]
    fn test_fullscreen_roundtrip() {
        let mut registry = CardRegistry::default();
        let id = registry.create(video(), at(40.0, 60.0));
        let bounds = Rect::new(0.0, 0.0, 1920.0, 1080.0);

        assert_eq!(registry.toggle_fullscreen(id, bounds), Some(true));
        assert_eq!(registry.get(id).unwrap().rect(), bounds);

        assert_eq!(registry.toggle_fullscreen(id, bounds), Some(false));
        let card = registry.get(id).unwrap();
        assert_eq!(card.position(), Vec2::new(40.0, 60.0));
        assert_eq!(card.size(), Size::new(320.0, 180.0));
        assert_eq!(registry.toggle_fullscreen(99, bounds), None);
    }

    #[test]
    fn test_locked_card_cannot_enter_fullscreen() {
        let mut registry = CardRegistry::default();
        let id = registry.create(video(), at(40.0, 60.0));
        let bounds = Rect::new(0.0, 0.0, 1920.0, 1080.0);

        registry.set_locked(id, true);
        assert_eq!(registry.toggle_fullscreen(id, bounds), Some(false));
        assert_eq!(registry.get(id).unwrap().position(), Vec2::new(40.0, 60.0));

        registry.set_locked(id, false);
        assert_eq!(registry.toggle_fullscreen(id, bounds), Some(true));
        registry.set_locked(id, true);
        assert_eq!(registry.toggle_fullscreen(id, bounds), Some(false));
        assert_eq!(registry.get(id).unwrap().size(), Size::new(320.0, 180.0));
    }

    #[test]
    fn test_hit_testing() {
        let mut registry = CardRegistry::default();
        let id = registry.create(video(), at(100.0, 100.0));
        let card = registry.get(id).unwrap().clone();

        let delete = card.button_rect(0);
        let (hit, region) = registry.region_at(Vec2::new(delete.x + 2.0, delete.y + 2.0)).unwrap();
        assert_eq!(hit, id);
        assert_eq!(region, CardRegion::DeleteButton);

        let mv = card.button_rect(4);
        let (_, region) = registry.region_at(Vec2::new(mv.x + 2.0, mv.y + 2.0)).unwrap();
        assert_eq!(region, CardRegion::MoveHandle);

        let (_, region) = registry.region_at(Vec2::new(418.0, 278.0)).unwrap();
        assert_eq!(region, CardRegion::Resize(ResizeHandle::SE));

        let (_, region) = registry.region_at(Vec2::new(101.0, 101.0)).unwrap();
        assert_eq!(region, CardRegion::Resize(ResizeHandle::NW));

        let (_, region) = registry.region_at(Vec2::new(250.0, 200.0)).unwrap();
        assert_eq!(region, CardRegion::Body);

        assert!(registry.region_at(Vec2::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn test_hit_testing_prefers_topmost() {
        let mut registry = CardRegistry::default();
        let below = registry.create(video(), at(100.0, 100.0));
        let above = registry.create(video(), at(150.0, 150.0));

        let (hit, _) = registry.region_at(Vec2::new(200.0, 200.0)).unwrap();
        assert_eq!(hit, above);

        registry.bring_to_front(below);
        let (hit, _) = registry.region_at(Vec2::new(200.0, 200.0)).unwrap();
        assert_eq!(hit, below);
    }
}
