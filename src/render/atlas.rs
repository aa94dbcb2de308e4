//! Sprite atlas: several images packed into one texture surface.
//!
//! Images are placed with a simple shelf packer (left to right, new row
//! when the current one is full), one pixel of padding between them. Each
//! placed image gets a `Clip`, its frame rectangles in atlas coordinates,
//! addressed by the `AtlasLocation` returned when it was added.

use thiserror::Error;

use super::resources::{ClipMetadata, Texture};
use crate::core::{IntRect, UVec2};

const PADDING: u32 = 1;

/// Packing failures. Both are fatal at renderer construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AtlasError {
    #[error("no room for {name:?} ({size:?}) in a {atlas:?} atlas")]
    Full { name: String, size: UVec2, atlas: UVec2 },
    #[error("tileset {name:?} has frames outside its {size:?} texture")]
    ClipOutOfBounds { name: String, size: UVec2 },
}

/// Handle to an image inside a `SpriteAtlas`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AtlasLocation(usize);

/// Frame rectangles of one packed image, in atlas coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clip {
    frames: Vec<IntRect>,
}

impl Clip {
    /// Frame `index`, `None` when out of range.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<IntRect> {
        self.frames.get(index).copied()
    }

    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

#[derive(Clone, Debug)]
struct Entry {
    name: String,
    area: IntRect,
    clip: Clip,
}

/// Packed texture surface.
///
/// ```
/// use horror_deck::render::{SpriteAtlas, Texture};
///
/// let mut atlas = SpriteAtlas::new(1024, 1024);
/// let bgr = atlas.add_image(&Texture::new("playbgr.png", 512, 512)).unwrap();
/// assert_eq!(atlas.clip(bgr).frame(0).unwrap().width, 512);
/// ```
#[derive(Clone, Debug)]
pub struct SpriteAtlas {
    size: UVec2,
    entries: Vec<Entry>,
    cursor: UVec2,
    row_height: u32,
}

impl SpriteAtlas {
    /// Empty atlas of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: UVec2::new(width, height),
            entries: Vec::new(),
            cursor: UVec2::new(PADDING, PADDING),
            row_height: 0,
        }
    }

    #[must_use]
    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Number of packed images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pack a whole image as a single-frame clip.
    pub fn add_image(&mut self, texture: &Texture) -> Result<AtlasLocation, AtlasError> {
        let full = IntRect::new(0, 0, texture.size.x, texture.size.y);
        self.insert(texture, vec![full])
    }

    /// Pack a tileset; each frame of `clip` becomes a frame of the result.
    pub fn add_tileset(
        &mut self,
        texture: &Texture,
        clip: &ClipMetadata,
    ) -> Result<AtlasLocation, AtlasError> {
        let bounds = IntRect::new(0, 0, texture.size.x, texture.size.y);
        let inside = |f: &IntRect| f.right() <= bounds.right() && f.bottom() <= bounds.bottom();
        match clip.frames() {
            Some(frames) if frames.len() == clip.frame_count && frames.iter().all(inside) => {
                self.insert(texture, frames)
            }
            _ => Err(AtlasError::ClipOutOfBounds {
                name: texture.name.clone(),
                size: texture.size,
            }),
        }
    }

    /// Frames of a packed image.
    ///
    /// Locations are only handed out by this atlas, so they are always valid
    /// for it.
    #[must_use]
    pub fn clip(&self, location: AtlasLocation) -> &Clip {
        &self.entries[location.0].clip
    }

    /// Where the whole image landed, and under which name.
    #[must_use]
    pub fn area(&self, location: AtlasLocation) -> (&str, IntRect) {
        let entry = &self.entries[location.0];
        (&entry.name, entry.area)
    }

    fn insert(&mut self, texture: &Texture, frames: Vec<IntRect>) -> Result<AtlasLocation, AtlasError> {
        let area = self.place(texture)?;
        let clip = Clip {
            frames: frames
                .into_iter()
                .map(|f| f.translated(area.left, area.top))
                .collect(),
        };
        self.entries.push(Entry {
            name: texture.name.clone(),
            area,
            clip,
        });
        Ok(AtlasLocation(self.entries.len() - 1))
    }

    fn place(&mut self, texture: &Texture) -> Result<IntRect, AtlasError> {
        let UVec2 { x: w, y: h } = texture.size;
        let atlas = self.size;
        let full = || AtlasError::Full {
            name: texture.name.clone(),
            size: texture.size,
            atlas,
        };

        let end = |start: u32, len: u32| start.checked_add(len)?.checked_add(PADDING);
        let fits = |start: u32, len: u32, limit: u32| end(start, len).is_some_and(|e| e <= limit);

        if !fits(self.cursor.x, w, atlas.x) {
            // start a new shelf
            let top = self.cursor.y.saturating_add(self.row_height).saturating_add(PADDING);
            self.cursor = UVec2::new(PADDING, top);
            self.row_height = 0;
        }
        if !fits(self.cursor.x, w, atlas.x) || !fits(self.cursor.y, h, atlas.y) {
            return Err(full());
        }

        let area = IntRect::new(self.cursor.x, self.cursor.y, w, h);
        self.cursor.x += w + PADDING;
        self.row_height = self.row_height.max(h);
        Ok(area)
    }
}
