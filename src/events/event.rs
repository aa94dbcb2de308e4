//! Domain events raised by the rules engine.
//!
//! Events describe what happened; they never carry instructions back into
//! the rules. The session owner drains them once per frame and reacts
//! (plays a sound, updates analytics, pops a game-over screen).

use serde::{Deserialize, Serialize};

use crate::cards::CardType;
use crate::rules::GameResult;

/// Something that happened during a rules update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Play the named sound resource.
    PlaySound { sound_name: String },

    /// The active card went to the back of the deck.
    CardSkipped { card_type: CardType },

    /// The active card was discarded.
    CardTrashed { card_type: CardType },

    /// The active card moved into an inventory slot.
    CardStashed { card_type: CardType, slot: usize },

    /// An inventory card went back on top of the deck.
    CardRetrieved { card_type: CardType, slot: usize },

    /// A biting card was left on top for too long.
    HeartLost { card_type: CardType, remaining: u32 },

    /// The session reached a terminal state. Raised once.
    GameEnded { result: GameResult },
}

impl GameEvent {
    /// Create a sound cue.
    pub fn sound(sound_name: impl Into<String>) -> Self {
        GameEvent::PlaySound {
            sound_name: sound_name.into(),
        }
    }

    /// Sound name if this is a sound cue.
    #[must_use]
    pub fn sound_name(&self) -> Option<&str> {
        match self {
            GameEvent::PlaySound { sound_name } => Some(sound_name),
            _ => None,
        }
    }
}
