//! Rules engine trait.
//!
//! A rules engine owns the gameplay logic and nothing else:
//! - What actions are legal for a scene
//! - How actions and elapsed time modify the scene
//! - Win/loss conditions
//!
//! It receives the scene by mutable reference for the duration of one call
//! and reports what happened through the event queue. It keeps no state
//! about the scene between calls beyond its own timers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{FrameTime, RulesConfig};
use crate::events::{EventQueue, GameEvent};
use crate::input::{Action, InputSnapshot};
use crate::scene::Scene;

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Every card left the deck with hearts to spare.
    DeckCleared,
    /// Hearts ran out.
    Defeated,
}

impl GameResult {
    #[must_use]
    pub fn is_victory(self) -> bool {
        matches!(self, GameResult::DeckCleared)
    }
}

/// Why an action was refused. A refused action leaves the scene untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum RejectReason {
    #[error("the deck is empty")]
    EmptyDeck,
    #[error("inventory slot {0} does not exist")]
    InvalidSlot(usize),
    #[error("inventory slot {0} is already occupied")]
    SlotOccupied(usize),
    #[error("inventory slot {0} is empty")]
    SlotEmpty(usize),
    #[error("the active card bites")]
    CardBites,
    #[error("the game is over")]
    GameOver,
}

/// Result of applying a single action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Accepted,
    Rejected(RejectReason),
}

impl ActionOutcome {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, ActionOutcome::Accepted)
    }
}

impl From<Result<(), RejectReason>> for ActionOutcome {
    fn from(result: Result<(), RejectReason>) -> Self {
        match result {
            Ok(()) => ActionOutcome::Accepted,
            Err(reason) => ActionOutcome::Rejected(reason),
        }
    }
}

/// Outcomes of one frame's actions, in input order.
pub type FrameOutcomes = SmallVec<[ActionOutcome; 4]>;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action`: must not touch the scene when it rejects
/// - `advance_time`: the only place time-based effects happen
/// - `is_terminal`: return `None` while the game continues
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Actions that `apply_action` would accept right now.
    fn legal_actions(&self, scene: &Scene) -> Vec<Action>;

    /// Apply one action.
    fn apply_action(
        &mut self,
        scene: &mut Scene,
        action: Action,
        events: &mut EventQueue<GameEvent>,
    ) -> ActionOutcome;

    /// Let `time` pass.
    fn advance_time(
        &mut self,
        scene: &mut Scene,
        time: &FrameTime,
        events: &mut EventQueue<GameEvent>,
    );

    /// Check if the game is over.
    fn is_terminal(&self, scene: &Scene) -> Option<GameResult>;

    // === Convenience Methods ===

    /// One frame: apply the snapshot's actions in order, then advance time.
    fn update(
        &mut self,
        scene: &mut Scene,
        input: &InputSnapshot,
        time: &FrameTime,
        events: &mut EventQueue<GameEvent>,
    ) -> FrameOutcomes {
        let outcomes = input
            .actions()
            .iter()
            .map(|&action| self.apply_action(scene, action, events))
            .collect();
        self.advance_time(scene, time, events);
        outcomes
    }
}
