//! Card illustrations.

use serde::{Deserialize, Serialize};

/// Illustration shown in the middle of a card.
///
/// The discriminant is the frame index inside the illustration tileset, so
/// the tileset must list its frames in this order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CardImage {
    #[default]
    Pistol = 0,
    Shotgun,
    Ammo,
    GreenHerb,
    RedHerb,
    FirstAid,
    Door,
    Key,
    Zombie,
    Licker,
}

impl CardImage {
    /// Number of illustrations; the tileset needs at least this many frames.
    pub const COUNT: usize = 10;

    /// Frame index in the illustration tileset.
    #[must_use]
    pub const fn frame_index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_indices_follow_declaration_order() {
        assert_eq!(CardImage::Pistol.frame_index(), 0);
        assert_eq!(CardImage::Shotgun.frame_index(), 1);
        assert_eq!(CardImage::Licker.frame_index(), CardImage::COUNT - 1);
    }
}
