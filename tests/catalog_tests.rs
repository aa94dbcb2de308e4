//! Catalog and scene-construction integration tests.

use horror_deck::cards::{
    Card, CardCatalog, CardCategory, CardImage, CardText, CardType, CatalogError,
};
use horror_deck::scene::{build_scene, Inventory, Scene};
use proptest::prelude::*;

/// The stock fixtures match the published card data exactly.
#[test]
fn test_standard_fixtures() {
    let catalog = CardCatalog::standard();

    let pistol = catalog.lookup(CardType::Pistol).unwrap();
    assert_eq!(pistol.card_type, CardType::Pistol);
    assert_eq!(pistol.image, CardImage::Pistol);
    assert_eq!(pistol.ammo, 3);
    assert_eq!(pistol.power, 1);
    assert!(!pistol.bites);
    assert_eq!(pistol.name.as_str(), "pistol");
    let text: Vec<&str> = pistol.text.iter().map(CardText::as_str).collect();
    assert_eq!(text, ["it uses 9mm ammo", "standard police", "firearm", ""]);

    let shotgun = catalog.lookup(CardType::Shotgun).unwrap();
    assert_eq!((shotgun.ammo, shotgun.power), (2, 2));
    assert_eq!(shotgun.name.as_str(), "shotgun");
}

#[test]
fn test_unlisted_types_fail_fast() {
    let catalog = CardCatalog::standard();
    for card_type in CardType::ALL {
        let listed = matches!(card_type, CardType::Pistol | CardType::Shotgun);
        assert_eq!(catalog.lookup(card_type).is_ok(), listed, "{card_type}");
    }
}

#[test]
fn test_build_standard_scene() {
    let scene = build_scene(CardCatalog::standard()).unwrap();

    assert_eq!(scene.deck.len(), 1);
    assert_eq!(scene.front().unwrap().card_type, CardType::Pistol);
    assert_eq!(scene.inventory.occupied(), Inventory::SLOTS);
    for card in scene.inventory.slots() {
        assert_eq!(card.unwrap().card_type, CardType::Shotgun);
    }
    assert_eq!(scene.hearts, Scene::STARTING_HEARTS);
}

#[test]
fn test_build_scene_needs_every_card() {
    let mut catalog = CardCatalog::new();
    catalog
        .register(Card::new(CardType::Pistol, CardImage::Pistol))
        .unwrap();

    let err = build_scene(&catalog).unwrap_err();
    assert!(matches!(err, CatalogError::UnknownCardType(CardType::Shotgun)));
}

#[test]
fn test_toml_catalog() {
    let catalog = CardCatalog::from_toml_str(
        r#"
        [[card]]
        type = "Pistol"
        image = "Pistol"
        ammo = 6
        name = "magnum"

        [[card]]
        type = "Shotgun"
        image = "Shotgun"
        ammo = 2
        power = 3

        [[card]]
        type = "GreenHerb"
        image = "GreenHerb"
        name = "green herb"
        text = ["restores a bit", "of health"]
        "#,
    )
    .unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.find_by_category(CardCategory::Healing).count(), 1);
    assert_eq!(catalog.lookup(CardType::GreenHerb).unwrap().text[1].as_str(), "of health");

    let scene = build_scene(&catalog).unwrap();
    assert_eq!(scene.front().unwrap().ammo, 6);
    assert_eq!(scene.inventory.get(2).unwrap().power, 3);
}

#[test]
fn test_toml_catalog_errors() {
    let too_many = CardCatalog::from_toml_str(
        r#"
        [[card]]
        type = "Door"
        image = "Door"
        text = ["a", "b", "c", "d", "e"]
        "#,
    )
    .unwrap_err();
    assert!(matches!(
        too_many,
        CatalogError::TooManyTextLines { card_type: CardType::Door, lines: 5 }
    ));

    let duplicate = CardCatalog::from_toml_str(
        r#"
        [[card]]
        type = "Key"
        image = "Key"

        [[card]]
        type = "Key"
        image = "Door"
        "#,
    )
    .unwrap_err();
    assert!(matches!(duplicate, CatalogError::DuplicateCardType(CardType::Key)));

    let unknown_field = CardCatalog::from_toml_str(
        r#"
        [[card]]
        type = "Key"
        image = "Key"
        damage = 4
        "#,
    )
    .unwrap_err();
    assert!(matches!(unknown_field, CatalogError::Parse(_)));
}

#[test]
fn test_long_toml_text_is_truncated() {
    let catalog = CardCatalog::from_toml_str(
        r#"
        [[card]]
        type = "FirstAid"
        image = "FirstAid"
        name = "first aid spray, fully restores health"
        "#,
    )
    .unwrap();

    let card = catalog.lookup(CardType::FirstAid).unwrap();
    assert_eq!(card.name.len(), CardText::CAPACITY);
    assert_eq!(card.name.as_str(), "first aid spray,");
}

proptest! {
    #[test]
    fn prop_card_builder_truncates_every_line(
        name in "\\PC{0,40}",
        lines in prop::collection::vec("\\PC{0,40}", 0..8),
    ) {
        let card = Card::new(CardType::Door, CardImage::Door)
            .with_name(&name)
            .with_text(lines.iter().map(String::as_str));
        prop_assert!(card.lines().all(|l| l.len() <= CardText::CAPACITY));
    }
}
