//! Gameplay rules.
//!
//! `RulesEngine` is the seam between the session and the gameplay logic;
//! `GameRulesEngine` is the game's implementation of it.
//!
//! The session calls into the engine once per frame with the current input
//! snapshot and frame time. The engine mutates the scene and reports what
//! happened as `GameEvent`s; it never reads or drives rendering.

pub mod engine;
pub mod game_rules;

pub use engine::{ActionOutcome, FrameOutcomes, GameResult, RejectReason, RulesEngine};
pub use game_rules::GameRulesEngine;
