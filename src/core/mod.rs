//! Core values shared by every subsystem: geometry, frame timing,
//! configuration and the session error type.

pub mod config;
pub mod error;
pub mod geometry;
pub mod time;

pub use config::{
    AppSettings, InputSettings, RulesConfig, SettingsError, SoundCues, VideoSettings,
    INTERNAL_GAME_RESOLUTION,
};
pub use error::GameError;
pub use geometry::{Circle, Color, IntRect, UVec2, Vec2};
pub use time::FrameTime;
