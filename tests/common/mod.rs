//! Shared fixtures for integration tests.

#![allow(dead_code)]

use horror_deck::cards::{Card, CardImage, CardType};
use horror_deck::core::{IntRect, UVec2};
use horror_deck::render::{ClipMetadata, Icon, ResourceManager, Texture};

pub const TILE: u32 = 64;

pub fn strip(count: usize) -> ClipMetadata {
    ClipMetadata {
        frame_size: UVec2::new(TILE, TILE),
        bounds: IntRect::new(0, 0, TILE * count as u32, TILE),
        frame_count: count,
        spacing: UVec2::default(),
    }
}

/// Every resource the renderer asks for.
pub fn resources() -> ResourceManager {
    ResourceManager::new()
        .with_texture(Texture::new("playbgr.png", 720, 1280))
        .with_texture(Texture::new("cardbgr.png", 600, 840))
        .with_texture(Texture::new("icons.png", TILE * Icon::COUNT as u32, TILE))
        .with_clip("icons.clip", strip(Icon::COUNT))
        .with_texture(Texture::new("illustrations.png", TILE * CardImage::COUNT as u32, TILE))
        .with_clip("illustrations.clip", strip(CardImage::COUNT))
        .with_font("ChunkFive-Regular.ttf")
}

pub fn zombie() -> Card {
    Card::new(CardType::Zombie, CardImage::Zombie)
        .with_power(1)
        .biting()
        .with_name("zombie")
        .with_text(["slow but hungry"])
}

pub fn key() -> Card {
    Card::new(CardType::Key, CardImage::Key).with_name("key")
}
