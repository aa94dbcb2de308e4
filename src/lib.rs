//! # horror-deck
//!
//! Core of a small survival-horror card game: card definitions, the
//! per-session scene, the rules that mutate it and a renderer that turns it
//! into draw commands.
//!
//! ## Design Principles
//!
//! 1. **One-way data flow**: input → rules → scene → renderer → draw
//!    commands. Nothing flows back from rendering into game state.
//!
//! 2. **Values at the seams**: input arrives as `InputSnapshot`s, results
//!    leave as `GameEvent`s and `DrawCommand`s. Windowing, audio and asset
//!    decoding stay outside the crate behind small traits.
//!
//! 3. **Fail at startup, not mid-frame**: unknown cards, missing resources
//!    and bad settings are errors from `GameSession::new`. Illegal moves
//!    during play are rejected outcomes, never panics.
//!
//! ## Modules
//!
//! - `core`: Geometry, frame time, settings, session errors
//! - `cards`: Card identities, bounded text, definitions, catalog
//! - `scene`: Deck, inventory and hearts; the opening scene
//! - `input`: Per-frame player intents, touch-control state
//! - `events`: Domain events and the FIFO queue that carries them
//! - `rules`: `RulesEngine` trait and the game's rules
//! - `render`: Resources, sprite atlas, layout, draw commands
//! - `session`: `GameSession`, which runs all of the above per frame

pub mod core;
pub mod cards;
pub mod scene;
pub mod input;
pub mod events;
pub mod rules;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use crate::core::{AppSettings, FrameTime, GameError, RulesConfig};

pub use crate::cards::{Card, CardCatalog, CardImage, CardText, CardType, CatalogError};

pub use crate::scene::{build_scene, Inventory, Scene};

pub use crate::input::{Action, InputSnapshot, TouchModel};

pub use crate::events::{EventQueue, GameEvent};

pub use crate::rules::{ActionOutcome, GameResult, GameRulesEngine, RejectReason, RulesEngine};

pub use crate::render::{
    CommandBuffer, DrawCommand, DrawTarget, RenderError, RenderingEngine, ResourceManager,
    ResourceProvider,
};

pub use crate::session::{GameSession, SessionSignal};
