//! Player intents for one frame.
//!
//! The backend translates taps and key presses into `Action`s and bundles
//! them into an `InputSnapshot`. The rules engine only ever sees snapshots,
//! never raw events.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One thing the player asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Send the active card to the back of the deck.
    Skip,
    /// Discard the active card.
    Trash,
    /// Move the active card into an inventory slot.
    Stash(usize),
    /// Put an inventory card back on top of the deck.
    Retrieve(usize),
}

/// Everything the player did since the previous frame.
///
/// ## Example
///
/// ```
/// use horror_deck::input::{Action, InputSnapshot};
///
/// let input = InputSnapshot::new().with_action(Action::Skip).with_action(Action::Stash(0));
/// assert_eq!(input.actions(), &[Action::Skip, Action::Stash(0)]);
/// assert!(!input.back_pressed());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Actions in the order they were issued.
    /// SmallVec keeps the usual zero-or-one action per frame off the heap.
    actions: SmallVec<[Action; 4]>,

    back_pressed: bool,
}

impl InputSnapshot {
    /// A frame with no input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action (builder pattern).
    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Mark the back button as pressed (builder pattern).
    #[must_use]
    pub fn with_back(mut self) -> Self {
        self.back_pressed = true;
        self
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    #[must_use]
    pub fn back_pressed(&self) -> bool {
        self.back_pressed
    }

    /// No actions and no back press.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.actions.is_empty() && !self.back_pressed
    }
}

impl FromIterator<Action> for InputSnapshot {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
            back_pressed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle() {
        assert!(InputSnapshot::new().is_idle());
        assert!(!InputSnapshot::new().with_back().is_idle());
        assert!(!InputSnapshot::new().with_action(Action::Trash).is_idle());
    }

    #[test]
    fn test_order_preserved() {
        let mut input: InputSnapshot = [Action::Retrieve(2), Action::Skip].into_iter().collect();
        input.push(Action::Trash);
        assert_eq!(input.actions(), &[Action::Retrieve(2), Action::Skip, Action::Trash]);
    }
}
