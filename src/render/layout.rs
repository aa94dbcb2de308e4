//! Screen layout, authored for the internal resolution.
//!
//! All positions are top-left corners in pixels. Card-relative offsets are
//! multiplied by the card's scale before being added to its position.

use crate::core::{Color, Vec2};

/// Frames of the icon tileset, in tileset order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Icon {
    Pause = 0,
    SkipSafe,
    SkipDanger,
    Trash,
    Heart,
    Ammo,
    Power,
}

impl Icon {
    /// Number of icons; the tileset needs at least this many frames.
    pub const COUNT: usize = 7;

    #[must_use]
    pub const fn frame_index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub active_card: Vec2,
    pub active_scale: f32,
    pub inventory: [Vec2; 3],
    pub inventory_scale: f32,
    pub card: CardLayout,
    pub hud: HudLayout,
    pub palette: Palette,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            active_card: Vec2::new(60.0, 136.0),
            active_scale: 1.0,
            inventory: [
                Vec2::new(30.0, 996.0),
                Vec2::new(260.0, 996.0),
                Vec2::new(490.0, 996.0),
            ],
            inventory_scale: 1.0 / 3.0,
            card: CardLayout::default(),
            hud: HudLayout::default(),
            palette: Palette::default(),
        }
    }
}

/// Offsets inside a 600x840 card at scale 1.
#[derive(Clone, Debug, PartialEq)]
pub struct CardLayout {
    pub illustration: Vec2,
    /// First ammo pip; further pips go straight down.
    pub ammo_origin: Vec2,
    pub ammo_step: f32,
    /// First power pip; further pips go right.
    pub power_origin: Vec2,
    pub power_step: f32,
    /// Name line; description lines follow below.
    pub text_origin: Vec2,
    pub line_step: f32,
    pub name_size: f32,
    pub text_size: f32,
}

impl Default for CardLayout {
    fn default() -> Self {
        CardLayout {
            illustration: Vec2::new(60.0, 60.0),
            ammo_origin: Vec2::new(8.0, 60.0),
            ammo_step: 52.0,
            power_origin: Vec2::new(60.0, 552.0),
            power_step: 52.0,
            text_origin: Vec2::new(40.0, 612.0),
            line_step: 44.0,
            name_size: 40.0,
            text_size: 28.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HudLayout {
    pub pause: Vec2,
    pub skip: Vec2,
    pub trash: Vec2,
    /// First heart; further hearts go right by `heart_step`.
    pub hearts_origin: Vec2,
    pub heart_step: f32,
    /// Most heart icons the row has room for.
    pub heart_slots: u32,
    pub fps: Vec2,
    pub fps_size: f32,
    pub thumb_radius: f32,
}

impl Default for HudLayout {
    fn default() -> Self {
        HudLayout {
            pause: Vec2::new(16.0, 16.0),
            skip: Vec2::new(544.0, 16.0),
            trash: Vec2::new(632.0, 16.0),
            hearts_origin: Vec2::new(104.0, 24.0),
            heart_step: 56.0,
            heart_slots: 8,
            fps: Vec2::new(16.0, 96.0),
            fps_size: 20.0,
            thumb_radius: 16.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub card_text: Color,
    pub fps: Color,
    pub touch_area: Color,
    pub touch_thumb: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            card_text: Color::rgb(20, 16, 12),
            fps: Color::WHITE,
            touch_area: Color::rgba(128, 128, 128, 128),
            touch_thumb: Color::rgb(128, 128, 128),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_slots_do_not_overlap() {
        let layout = Layout::default();
        let thumb_width = 600.0 * layout.inventory_scale;
        for pair in layout.inventory.windows(2) {
            assert!(pair[0].x + thumb_width <= pair[1].x);
        }
    }

    #[test]
    fn test_icon_frames() {
        assert_eq!(Icon::Pause.frame_index(), 0);
        assert_eq!(Icon::Power.frame_index(), Icon::COUNT - 1);
    }
}
