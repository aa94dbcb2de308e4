//! Card definitions - static card data.
//!
//! A `Card` is an immutable value: once built into a catalog it is only
//! ever cloned into a scene, never changed in place.

use serde::{Deserialize, Serialize};

use super::card_type::CardType;
use super::image::CardImage;
use super::text::CardText;

/// Number of flavour-text lines below the card name.
pub const TEXT_LINES: usize = 4;

/// Display and gameplay attributes of one card.
///
/// ## Example
///
/// ```
/// use horror_deck::cards::{Card, CardImage, CardType};
///
/// let pistol = Card::new(CardType::Pistol, CardImage::Pistol)
///     .with_ammo(3)
///     .with_power(1)
///     .with_name("pistol")
///     .with_text(["it uses 9mm ammo", "standard police", "firearm"]);
///
/// assert_eq!(pistol.ammo, 3);
/// assert_eq!(pistol.text[2].as_str(), "firearm");
/// assert!(pistol.text[3].is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Identity this card was built for.
    pub card_type: CardType,

    /// Illustration.
    pub image: CardImage,

    /// Ammo pips.
    pub ammo: u32,

    /// Power pips.
    pub power: u32,

    /// Hazardous unless skipped in time.
    pub bites: bool,

    /// Title line.
    pub name: CardText,

    /// Flavour lines; unused lines are empty.
    pub text: [CardText; TEXT_LINES],
}

impl Card {
    /// Create a card with no pips, no text, and `bites == false`.
    #[must_use]
    pub fn new(card_type: CardType, image: CardImage) -> Self {
        Self {
            card_type,
            image,
            ammo: 0,
            power: 0,
            bites: false,
            name: CardText::default(),
            text: Default::default(),
        }
    }

    #[must_use]
    pub fn with_ammo(mut self, ammo: u32) -> Self {
        self.ammo = ammo;
        self
    }

    #[must_use]
    pub fn with_power(mut self, power: u32) -> Self {
        self.power = power;
        self
    }

    /// Mark the card as hazardous (builder pattern).
    #[must_use]
    pub fn biting(mut self) -> Self {
        self.bites = true;
        self
    }

    /// Set the title, truncated to line capacity.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = CardText::new(name);
        self
    }

    /// Set flavour lines in order, truncated to line capacity.
    ///
    /// Lines beyond [`TEXT_LINES`] are ignored; missing lines stay empty.
    #[must_use]
    pub fn with_text<'a>(mut self, lines: impl IntoIterator<Item = &'a str>) -> Self {
        self.text = Default::default();
        for (slot, line) in self.text.iter_mut().zip(lines) {
            *slot = CardText::new(line);
        }
        self
    }

    /// Name followed by the four flavour lines.
    pub fn lines(&self) -> impl Iterator<Item = &CardText> {
        std::iter::once(&self.name).chain(self.text.iter())
    }
}
