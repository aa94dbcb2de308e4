//! Starting configuration of a session.

use im::vector;

use super::state::{Inventory, Scene};
use crate::cards::{CardCatalog, CardType, CatalogError};

/// Build the opening scene from `catalog`.
///
/// Deck: a pistol. Inventory: three shotguns. Hearts: 5. Fails fast if the
/// catalog lacks either card.
///
/// ```
/// use horror_deck::cards::{CardCatalog, CardType};
/// use horror_deck::scene::build_scene;
///
/// let scene = build_scene(CardCatalog::standard()).unwrap();
/// assert_eq!(scene.front().unwrap().card_type, CardType::Pistol);
/// assert_eq!(scene.inventory.occupied(), 3);
/// assert_eq!(scene.hearts, 5);
/// ```
pub fn build_scene(catalog: &CardCatalog) -> Result<Scene, CatalogError> {
    let pistol = catalog.lookup(CardType::Pistol)?;
    let shotgun = catalog.lookup(CardType::Shotgun)?;

    Ok(Scene {
        deck: vector![pistol.clone()],
        inventory: Inventory::new([
            Some(shotgun.clone()),
            Some(shotgun.clone()),
            Some(shotgun.clone()),
        ]),
        hearts: Scene::STARTING_HEARTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardImage};

    #[test]
    fn test_standard_scene() {
        let catalog = CardCatalog::standard();
        let scene = build_scene(catalog).unwrap();

        assert_eq!(scene.deck.len(), 1);
        assert_eq!(scene.front(), Some(catalog.lookup(CardType::Pistol).unwrap()));
        let shotgun = catalog.lookup(CardType::Shotgun).unwrap();
        assert!(scene.inventory.slots().all(|s| s == Some(shotgun)));
        assert_eq!(scene.hearts, 5);
    }

    #[test]
    fn test_missing_card_fails_fast() {
        let mut catalog = CardCatalog::new();
        catalog
            .register(Card::new(CardType::Pistol, CardImage::Pistol))
            .unwrap();

        let err = build_scene(&catalog).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCardType(CardType::Shotgun)));
    }

    #[test]
    fn test_builds_are_independent() {
        let mut a = build_scene(CardCatalog::standard()).unwrap();
        let b = build_scene(CardCatalog::standard()).unwrap();

        a.deck.pop_front();
        a.hearts = 1;
        assert_eq!(b.deck.len(), 1);
        assert_eq!(b.hearts, 5);
    }
}
