//! Card identities.
//!
//! `CardType` names every card the game knows about. The same enum covers
//! pick-ups (weapons, healing, key items) and enemy encounters, so an
//! encounter is just another card on top of the deck.

use serde::{Deserialize, Serialize};

/// Card identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardType {
    // Weapons
    Pistol,
    Shotgun,
    Ammo,

    // Healing
    GreenHerb,
    RedHerb,
    FirstAid,

    // Items
    Door,
    Key,

    // Enemies
    Zombie,
    Licker,
}

/// Coarse grouping of card types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Weapon,
    Healing,
    Item,
    Enemy,
}

impl CardType {
    /// Every card type, in declaration order.
    pub const ALL: [CardType; 10] = [
        CardType::Pistol,
        CardType::Shotgun,
        CardType::Ammo,
        CardType::GreenHerb,
        CardType::RedHerb,
        CardType::FirstAid,
        CardType::Door,
        CardType::Key,
        CardType::Zombie,
        CardType::Licker,
    ];

    /// Which group this card belongs to.
    #[must_use]
    pub const fn category(self) -> CardCategory {
        match self {
            CardType::Pistol | CardType::Shotgun | CardType::Ammo => CardCategory::Weapon,
            CardType::GreenHerb | CardType::RedHerb | CardType::FirstAid => CardCategory::Healing,
            CardType::Door | CardType::Key => CardCategory::Item,
            CardType::Zombie | CardType::Licker => CardCategory::Enemy,
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(CardType::Shotgun.category(), CardCategory::Weapon);
        assert_eq!(CardType::RedHerb.category(), CardCategory::Healing);
        assert_eq!(CardType::Key.category(), CardCategory::Item);
        assert_eq!(CardType::Licker.category(), CardCategory::Enemy);
    }

    #[test]
    fn test_all_is_exhaustive_and_unique() {
        let mut all = CardType::ALL.to_vec();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), CardType::ALL.len());
    }

    #[test]
    fn test_display() {
        assert_eq!(CardType::GreenHerb.to_string(), "GreenHerb");
    }
}
