//! Rendering: resources, sprite atlas, layout and draw commands.
//!
//! The renderer reads the `Scene` and emits `DrawCommand`s into a
//! `DrawTarget`. It owns no game state and never changes the scene.

pub mod atlas;
pub mod command;
pub mod engine;
pub mod fps;
pub mod layout;
pub mod resources;

pub use atlas::{AtlasError, AtlasLocation, Clip, SpriteAtlas};
pub use command::{CommandBuffer, DrawCommand, DrawTarget, View};
pub use engine::{RenderError, RenderingEngine};
pub use fps::FpsCounter;
pub use layout::{CardLayout, HudLayout, Icon, Layout, Palette};
pub use resources::{
    ClipMetadata, Font, ResourceError, ResourceKind, ResourceManager, ResourceProvider, Texture,
};
