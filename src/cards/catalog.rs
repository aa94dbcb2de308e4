//! Card catalog for definition lookup.
//!
//! The `CardCatalog` maps each `CardType` to its `Card`. It is built once
//! and then only read. The stock table is available process-wide through
//! [`CardCatalog::standard`]; custom tables can be assembled in code or
//! loaded from TOML.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use super::card_type::{CardCategory, CardType};
use super::definition::{Card, TEXT_LINES};
use super::image::CardImage;

/// Errors raised by catalog construction and lookup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown card type: {0}")]
    UnknownCardType(CardType),
    #[error("card type {0} is already registered")]
    DuplicateCardType(CardType),
    #[error("card {card_type} has {lines} text lines, at most 4 fit")]
    TooManyTextLines { card_type: CardType, lines: usize },
    #[error("malformed catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Catalog of card definitions keyed by type.
///
/// ## Example
///
/// ```
/// use horror_deck::cards::{Card, CardCatalog, CardImage, CardType};
///
/// let mut catalog = CardCatalog::new();
/// catalog
///     .register(Card::new(CardType::Key, CardImage::Key).with_name("key"))
///     .unwrap();
///
/// assert_eq!(catalog.lookup(CardType::Key).unwrap().name.as_str(), "key");
/// assert!(catalog.lookup(CardType::Door).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardType, Card>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock catalog, built on first use and shared for the rest of the
    /// process.
    pub fn standard() -> &'static CardCatalog {
        static STANDARD: OnceLock<CardCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let mut catalog = CardCatalog::new();
            for card in standard_cards() {
                // standard_cards() lists each type once
                catalog.cards.insert(card.card_type, card);
            }
            catalog
        })
    }

    /// Register a card under its own `card_type`.
    pub fn register(&mut self, card: Card) -> Result<(), CatalogError> {
        if self.cards.contains_key(&card.card_type) {
            return Err(CatalogError::DuplicateCardType(card.card_type));
        }
        self.cards.insert(card.card_type, card);
        Ok(())
    }

    /// Look a card up, failing for unregistered types.
    pub fn lookup(&self, card_type: CardType) -> Result<&Card, CatalogError> {
        self.cards
            .get(&card_type)
            .ok_or(CatalogError::UnknownCardType(card_type))
    }

    /// Look a card up, `None` for unregistered types.
    #[must_use]
    pub fn get(&self, card_type: CardType) -> Option<&Card> {
        self.cards.get(&card_type)
    }

    #[must_use]
    pub fn contains(&self, card_type: CardType) -> bool {
        self.cards.contains_key(&card_type)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Cards in the given category (unordered).
    pub fn find_by_category(&self, category: CardCategory) -> impl Iterator<Item = &Card> {
        self.cards
            .values()
            .filter(move |c| c.card_type.category() == category)
    }

    /// Parse a catalog from a TOML document of `[[card]]` tables.
    ///
    /// ```
    /// use horror_deck::cards::{CardCatalog, CardType};
    ///
    /// let catalog = CardCatalog::from_toml_str(r#"
    ///     [[card]]
    ///     type = "Zombie"
    ///     image = "Zombie"
    ///     power = 1
    ///     bites = true
    ///     name = "zombie"
    ///     text = ["slow but hungry"]
    /// "#).unwrap();
    ///
    /// assert!(catalog.lookup(CardType::Zombie).unwrap().bites);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = toml::from_str(source)?;
        let mut catalog = CardCatalog::new();
        for spec in document.card {
            catalog.register(spec.into_card()?)?;
        }
        Ok(catalog)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    card: Vec<CardSpec>,
}

/// On-disk shape of one card; text lines are a list instead of four fields.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CardSpec {
    #[serde(rename = "type")]
    card_type: CardType,
    image: CardImage,
    #[serde(default)]
    ammo: u32,
    #[serde(default)]
    power: u32,
    #[serde(default)]
    bites: bool,
    #[serde(default)]
    name: String,
    #[serde(default)]
    text: Vec<String>,
}

impl CardSpec {
    fn into_card(self) -> Result<Card, CatalogError> {
        if self.text.len() > TEXT_LINES {
            return Err(CatalogError::TooManyTextLines {
                card_type: self.card_type,
                lines: self.text.len(),
            });
        }
        let mut card = Card::new(self.card_type, self.image)
            .with_ammo(self.ammo)
            .with_power(self.power)
            .with_name(&self.name)
            .with_text(self.text.iter().map(String::as_str));
        card.bites = self.bites;
        Ok(card)
    }
}

fn standard_cards() -> [Card; 2] {
    [
        Card::new(CardType::Pistol, CardImage::Pistol)
            .with_ammo(3)
            .with_power(1)
            .with_name("pistol")
            .with_text(["it uses 9mm ammo", "standard police", "firearm"]),
        Card::new(CardType::Shotgun, CardImage::Shotgun)
            .with_ammo(2)
            .with_power(2)
            .with_name("shotgun")
            .with_text(["remington m1100"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_fixtures() {
        let catalog = CardCatalog::standard();
        assert_eq!(catalog.len(), 2);

        let pistol = catalog.lookup(CardType::Pistol).unwrap();
        assert_eq!(pistol.image, CardImage::Pistol);
        assert_eq!((pistol.ammo, pistol.power, pistol.bites), (3, 1, false));

        let shotgun = catalog.lookup(CardType::Shotgun).unwrap();
        assert_eq!(shotgun.image, CardImage::Shotgun);
        assert_eq!((shotgun.ammo, shotgun.power, shotgun.bites), (2, 2, false));
        assert_eq!(shotgun.text[0].as_str(), "remington m1100");
    }

    #[test]
    fn test_standard_is_shared() {
        assert!(std::ptr::eq(CardCatalog::standard(), CardCatalog::standard()));
    }

    #[test]
    fn test_unknown_type() {
        let err = CardCatalog::standard().lookup(CardType::Zombie).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCardType(CardType::Zombie)));
        assert!(CardCatalog::standard().get(CardType::Zombie).is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut catalog = CardCatalog::new();
        catalog.register(Card::new(CardType::Door, CardImage::Door)).unwrap();
        let err = catalog
            .register(Card::new(CardType::Door, CardImage::Key))
            .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateCardType(CardType::Door)));
        assert_eq!(catalog.lookup(CardType::Door).unwrap().image, CardImage::Door);
    }

    #[test]
    fn test_find_by_category() {
        let mut catalog = CardCatalog::new();
        catalog.register(Card::new(CardType::Zombie, CardImage::Zombie)).unwrap();
        catalog.register(Card::new(CardType::Licker, CardImage::Licker)).unwrap();
        catalog.register(Card::new(CardType::Key, CardImage::Key)).unwrap();

        assert_eq!(catalog.find_by_category(CardCategory::Enemy).count(), 2);
        assert_eq!(catalog.find_by_category(CardCategory::Healing).count(), 0);
    }

    #[test]
    fn test_toml_catalog() {
        let catalog = CardCatalog::from_toml_str(
            r#"
            [[card]]
            type = "GreenHerb"
            image = "GreenHerb"
            name = "green herb"
            text = ["restores a heart", "when combined it", "heals more"]

            [[card]]
            type = "Licker"
            image = "Licker"
            power = 3
            bites = true
            name = "licker"
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let herb = catalog.lookup(CardType::GreenHerb).unwrap();
        assert!(!herb.bites);
        assert_eq!(herb.text[2].as_str(), "heals more");
        assert!(catalog.lookup(CardType::Licker).unwrap().bites);
    }

    #[test]
    fn test_toml_too_many_lines() {
        let err = CardCatalog::from_toml_str(
            r#"
            [[card]]
            type = "Key"
            image = "Key"
            text = ["a", "b", "c", "d", "e"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::TooManyTextLines { lines: 5, .. }));
    }

    #[test]
    fn test_toml_duplicate() {
        let err = CardCatalog::from_toml_str(
            "[[card]]\ntype = \"Key\"\nimage = \"Key\"\n[[card]]\ntype = \"Key\"\nimage = \"Key\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCardType(CardType::Key)));
    }

    #[test]
    fn test_toml_unknown_field() {
        let err = CardCatalog::from_toml_str(
            "[[card]]\ntype = \"Key\"\nimage = \"Key\"\ncolour = \"red\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
