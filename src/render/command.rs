//! Value-based draw commands.
//!
//! The renderer never mutates a shared sprite object between draws. Every
//! element on screen is one self-contained `DrawCommand`, so a frame is just
//! an ordered list of values that a backend replays and a test can compare.

use serde::{Deserialize, Serialize};

use crate::core::{Circle, Color, IntRect, Vec2};

/// Coordinate space for the commands that follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    /// Game world, laid out at the internal resolution.
    World,
    /// HUD overlay.
    Hud,
}

/// One drawing operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Switch the active view.
    SetView(View),

    /// Textured quad cut from the sprite atlas.
    Sprite {
        /// Source region in the atlas.
        src: IntRect,
        /// Top-left corner on screen.
        position: Vec2,
        /// Uniform scale applied to `src`'s size.
        scale: f32,
        tint: Color,
    },

    /// Text in the session font.
    Text {
        content: String,
        position: Vec2,
        /// Character size in pixels, after scaling.
        size: f32,
        color: Color,
    },

    /// Circle outline (touch overlay).
    Circle { circle: Circle, color: Color },
}

impl DrawCommand {
    #[must_use]
    pub fn sprite(src: IntRect, position: Vec2, scale: f32) -> Self {
        DrawCommand::Sprite {
            src,
            position,
            scale,
            tint: Color::WHITE,
        }
    }

    /// Source region if this is a sprite.
    #[must_use]
    pub fn sprite_src(&self) -> Option<IntRect> {
        match self {
            DrawCommand::Sprite { src, .. } => Some(*src),
            _ => None,
        }
    }

    /// Screen position of sprites and text.
    #[must_use]
    pub fn position(&self) -> Option<Vec2> {
        match self {
            DrawCommand::Sprite { position, .. } | DrawCommand::Text { position, .. } => {
                Some(*position)
            }
            DrawCommand::Circle { circle, .. } => Some(circle.center),
            DrawCommand::SetView(_) => None,
        }
    }
}

/// Anything that accepts draw commands (a window backend, a recorder).
pub trait DrawTarget {
    fn submit(&mut self, command: DrawCommand);
}

/// `DrawTarget` that records commands in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Empty the buffer, keeping its allocation for the next frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Take the recorded commands.
    #[must_use]
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl DrawTarget for CommandBuffer {
    fn submit(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_records_in_order() {
        let mut buffer = CommandBuffer::new();
        buffer.submit(DrawCommand::SetView(View::World));
        buffer.submit(DrawCommand::sprite(IntRect::new(0, 0, 4, 4), Vec2::new(1.0, 2.0), 1.0));

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.commands()[0], DrawCommand::SetView(View::World));
        assert_eq!(buffer.commands()[1].position(), Some(Vec2::new(1.0, 2.0)));
        assert_eq!(buffer.commands()[1].sprite_src(), Some(IntRect::new(0, 0, 4, 4)));

        buffer.clear();
        assert!(buffer.is_empty());
    }
}
