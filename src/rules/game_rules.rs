//! The game's rules.
//!
//! ## Actions
//!
//! - `Skip`: active card goes to the back of the deck
//! - `Trash`: active card is discarded
//! - `Stash(slot)`: active card moves into an empty inventory slot
//! - `Retrieve(slot)`: inventory card goes back on top of the deck
//!
//! A biting card on top can only be skipped or trashed: it cannot be
//! stashed, and it blocks retrieving from the inventory.
//!
//! ## Time
//!
//! While a biting card is on top, a timer runs. Each time it reaches
//! `RulesConfig::bite_delay` one heart is lost. Any accepted action changes
//! the top card and restarts the timer.
//!
//! ## End of game
//!
//! `Defeated` at zero hearts, `DeckCleared` when the deck runs out. After
//! that every action is rejected and time has no effect.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::engine::{ActionOutcome, GameResult, RejectReason, RulesEngine};
use crate::core::{FrameTime, RulesConfig};
use crate::events::{EventQueue, GameEvent};
use crate::input::Action;
use crate::scene::{Inventory, Scene};

/// Rules engine for a single session.
#[derive(Clone, Debug)]
pub struct GameRulesEngine {
    config: RulesConfig,
    bite_timer: Duration,
    finished: Option<GameResult>,
}

impl GameRulesEngine {
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self {
            config,
            bite_timer: Duration::ZERO,
            finished: None,
        }
    }

    /// Time the current biting card has been on top.
    #[must_use]
    pub fn bite_timer(&self) -> Duration {
        self.bite_timer
    }

    /// Result once the game has ended.
    #[must_use]
    pub fn finished(&self) -> Option<GameResult> {
        self.finished
    }

    /// Bring a freshly built scene within the configured heart limit.
    pub fn prepare(&self, scene: &mut Scene) {
        scene.hearts = scene.hearts.min(self.config.max_hearts);
    }

    fn skip(&self, scene: &mut Scene, events: &mut EventQueue<GameEvent>) -> Result<(), RejectReason> {
        let card = scene.deck.pop_front().ok_or(RejectReason::EmptyDeck)?;
        events.push(GameEvent::CardSkipped { card_type: card.card_type });
        events.push(GameEvent::sound(&self.config.sounds.skip));
        scene.deck.push_back(card);
        Ok(())
    }

    fn trash(&self, scene: &mut Scene, events: &mut EventQueue<GameEvent>) -> Result<(), RejectReason> {
        let card = scene.deck.pop_front().ok_or(RejectReason::EmptyDeck)?;
        events.push(GameEvent::CardTrashed { card_type: card.card_type });
        events.push(GameEvent::sound(&self.config.sounds.trash));
        Ok(())
    }

    fn stash(
        &self,
        scene: &mut Scene,
        slot: usize,
        events: &mut EventQueue<GameEvent>,
    ) -> Result<(), RejectReason> {
        check_slot(slot)?;
        let front = scene.front().ok_or(RejectReason::EmptyDeck)?;
        if front.bites {
            return Err(RejectReason::CardBites);
        }
        if scene.inventory.is_occupied(slot) {
            return Err(RejectReason::SlotOccupied(slot));
        }

        let card = scene.deck.pop_front().ok_or(RejectReason::EmptyDeck)?;
        events.push(GameEvent::CardStashed { card_type: card.card_type, slot });
        events.push(GameEvent::sound(&self.config.sounds.stash));
        scene.inventory.replace(slot, card);
        Ok(())
    }

    fn retrieve(
        &self,
        scene: &mut Scene,
        slot: usize,
        events: &mut EventQueue<GameEvent>,
    ) -> Result<(), RejectReason> {
        check_slot(slot)?;
        if scene.front_bites() {
            return Err(RejectReason::CardBites);
        }

        let card = scene.inventory.take(slot).ok_or(RejectReason::SlotEmpty(slot))?;
        events.push(GameEvent::CardRetrieved { card_type: card.card_type, slot });
        events.push(GameEvent::sound(&self.config.sounds.retrieve));
        scene.deck.push_front(card);
        Ok(())
    }

    /// Record the end of the game the first time it is reached.
    fn check_finished(&mut self, scene: &Scene, events: &mut EventQueue<GameEvent>) {
        if self.finished.is_some() {
            return;
        }
        if let Some(result) = self.is_terminal(scene) {
            info!(?result, hearts = scene.hearts, "game over");
            self.finished = Some(result);
            events.push(GameEvent::GameEnded { result });
        }
    }
}

impl Default for GameRulesEngine {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

fn check_slot(slot: usize) -> Result<(), RejectReason> {
    if slot < Inventory::SLOTS {
        Ok(())
    } else {
        Err(RejectReason::InvalidSlot(slot))
    }
}

impl RulesEngine for GameRulesEngine {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn legal_actions(&self, scene: &Scene) -> Vec<Action> {
        if self.finished.is_some() {
            return Vec::new();
        }

        let mut actions = Vec::new();
        let Some(front) = scene.front() else {
            // Unreachable in practice: an empty deck ends the game.
            return actions;
        };

        actions.push(Action::Skip);
        actions.push(Action::Trash);
        if front.bites {
            return actions;
        }

        for (slot, card) in scene.inventory.slots().enumerate() {
            match card {
                None => actions.push(Action::Stash(slot)),
                Some(_) => actions.push(Action::Retrieve(slot)),
            }
        }
        actions
    }

    fn apply_action(
        &mut self,
        scene: &mut Scene,
        action: Action,
        events: &mut EventQueue<GameEvent>,
    ) -> ActionOutcome {
        let result = if self.finished.is_some() {
            Err(RejectReason::GameOver)
        } else {
            match action {
                Action::Skip => self.skip(scene, events),
                Action::Trash => self.trash(scene, events),
                Action::Stash(slot) => self.stash(scene, slot, events),
                Action::Retrieve(slot) => self.retrieve(scene, slot, events),
            }
        };

        match result {
            Ok(()) => {
                debug!(?action, deck = scene.deck.len(), "action accepted");
                self.bite_timer = Duration::ZERO;
                self.check_finished(scene, events);
            }
            Err(reason) => warn!(?action, %reason, "action rejected"),
        }
        result.into()
    }

    fn advance_time(
        &mut self,
        scene: &mut Scene,
        time: &FrameTime,
        events: &mut EventQueue<GameEvent>,
    ) {
        if self.finished.is_some() {
            return;
        }
        let Some(card_type) = scene.front().filter(|c| c.bites).map(|c| c.card_type) else {
            self.bite_timer = Duration::ZERO;
            return;
        };

        let delay = self.config.bite_delay();
        self.bite_timer = self.bite_timer.saturating_add(time.delta());
        while self.bite_timer >= delay && scene.hearts > 0 {
            self.bite_timer -= delay;
            scene.hearts -= 1;
            debug!(%card_type, hearts = scene.hearts, "bitten");
            events.push(GameEvent::HeartLost { card_type, remaining: scene.hearts });
            events.push(GameEvent::sound(&self.config.sounds.bite));
        }
        if scene.hearts == 0 {
            self.bite_timer = Duration::ZERO;
        }
        self.check_finished(scene, events);
    }

    fn is_terminal(&self, scene: &Scene) -> Option<GameResult> {
        if scene.hearts == 0 {
            Some(GameResult::Defeated)
        } else if scene.deck.is_empty() {
            Some(GameResult::DeckCleared)
        } else {
            None
        }
    }
}
