//! Mutable per-session state.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Fixed-size set of optional card slots.
///
/// The slot count never changes; an empty slot holds no card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    slots: [Option<Card>; Inventory::SLOTS],
}

impl Inventory {
    /// Number of slots.
    pub const SLOTS: usize = 3;

    /// Inventory with all slots filled as given.
    #[must_use]
    pub fn new(slots: [Option<Card>; Inventory::SLOTS]) -> Self {
        Self { slots }
    }

    /// Card in `slot`, `None` when empty or out of range.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Card> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn is_occupied(&self, slot: usize) -> bool {
        self.get(slot).is_some()
    }

    /// Put a card into `slot`, returning whatever was there before.
    ///
    /// Out-of-range slots hand the card straight back.
    pub fn replace(&mut self, slot: usize, card: Card) -> Option<Card> {
        match self.slots.get_mut(slot) {
            Some(entry) => entry.replace(card),
            None => Some(card),
        }
    }

    /// Remove and return the card in `slot`.
    pub fn take(&mut self, slot: usize) -> Option<Card> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// All slots in order, including empty ones.
    pub fn slots(&self) -> impl Iterator<Item = Option<&Card>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Number of filled slots.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// First empty slot, if any.
    #[must_use]
    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }
}

/// Game state for one session.
///
/// ## Fields
///
/// - `deck`: ordered cards; the front card is the active one
/// - `inventory`: three optional card slots
/// - `hearts`: remaining health
///
/// `deck` is an `im::Vector`, so cloning a scene for a snapshot is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub deck: Vector<Card>,
    pub inventory: Inventory,
    pub hearts: u32,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            deck: Vector::new(),
            inventory: Inventory::default(),
            hearts: Scene::STARTING_HEARTS,
        }
    }
}

impl Scene {
    /// Hearts at the start of a session.
    pub const STARTING_HEARTS: u32 = 5;

    /// The active card.
    #[must_use]
    pub fn front(&self) -> Option<&Card> {
        self.deck.front()
    }

    /// Does the active card bite?
    #[must_use]
    pub fn front_bites(&self) -> bool {
        self.front().is_some_and(|c| c.bites)
    }
}
