//! Game session: owns the scene and runs input, rules, rendering and event
//! dispatch in frame order.

pub mod game_session;

pub use game_session::{GameSession, SessionSignal};
