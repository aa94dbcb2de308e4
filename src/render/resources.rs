//! Named resources the renderer needs at construction.
//!
//! Loading and decoding files is the platform layer's job. The core only
//! needs to know a resource's name and its metadata (texture size, tileset
//! frame layout), looked up by string key through `ResourceProvider`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{IntRect, UVec2};

/// Kind of resource, for error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Texture,
    Font,
    Clip,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::Texture => "texture",
            ResourceKind::Font => "font",
            ResourceKind::Clip => "clip",
        };
        f.write_str(name)
    }
}

/// A resource lookup failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} resource {name:?} is not loaded")]
pub struct ResourceError {
    pub kind: ResourceKind,
    pub name: String,
}

impl ResourceError {
    fn missing(kind: ResourceKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}

/// A loaded image, described by name and pixel size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Texture {
    pub name: String,
    pub size: UVec2,
}

impl Texture {
    #[must_use]
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            size: UVec2::new(width, height),
        }
    }
}

/// A loaded font.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub name: String,
}

/// Frame layout of a tileset texture.
///
/// Frames are `frame_size` cells read left to right, top to bottom, starting
/// at `bounds.left/top` and separated by `spacing`. Every frame must lie
/// inside `bounds`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipMetadata {
    pub frame_size: UVec2,
    pub bounds: IntRect,
    pub frame_count: usize,
    #[serde(default)]
    pub spacing: UVec2,
}

impl ClipMetadata {
    /// Source rectangles of each frame, relative to the texture.
    ///
    /// `None` when the frames do not fit in `bounds` or their coordinates
    /// overflow.
    #[must_use]
    pub fn frames(&self) -> Option<Vec<IntRect>> {
        let step_x = self.frame_size.x.checked_add(self.spacing.x)?;
        let step_y = self.frame_size.y.checked_add(self.spacing.y)?;
        if step_x == 0 || step_y == 0 {
            return (self.frame_count == 0).then(Vec::new);
        }

        let columns = u64::from(self.bounds.width.checked_add(self.spacing.x)? / step_x);
        let rows = u64::from(self.bounds.height.checked_add(self.spacing.y)? / step_y);
        let count = u64::try_from(self.frame_count).ok()?;
        if count > columns * rows {
            return None;
        }

        (0..count)
            .map(|i| {
                let col = u32::try_from(i % columns).ok()?;
                let row = u32::try_from(i / columns).ok()?;
                let left = self.bounds.left.checked_add(col.checked_mul(step_x)?)?;
                let top = self.bounds.top.checked_add(row.checked_mul(step_y)?)?;
                left.checked_add(self.frame_size.x)?;
                top.checked_add(self.frame_size.y)?;
                Some(IntRect::new(left, top, self.frame_size.x, self.frame_size.y))
            })
            .collect()
    }
}

/// Lookup of resources by name.
///
/// Every getter fails with `ResourceError` when the name is unknown; callers
/// treat that as fatal at construction time.
pub trait ResourceProvider {
    fn texture(&self, name: &str) -> Result<&Texture, ResourceError>;
    fn font(&self, name: &str) -> Result<&Font, ResourceError>;
    fn clip(&self, name: &str) -> Result<&ClipMetadata, ResourceError>;
}

/// In-memory `ResourceProvider` keyed by name.
///
/// ```
/// use horror_deck::render::{ResourceManager, ResourceProvider, Texture};
///
/// let resources = ResourceManager::new().with_texture(Texture::new("playbgr.png", 720, 1280));
/// assert_eq!(resources.texture("playbgr.png").unwrap().size.x, 720);
/// assert!(resources.texture("missing.png").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ResourceManager {
    textures: FxHashMap<String, Texture>,
    fonts: FxHashMap<String, Font>,
    clips: FxHashMap<String, ClipMetadata>,
}

impl ResourceManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_texture(&mut self, texture: Texture) {
        self.textures.insert(texture.name.clone(), texture);
    }

    pub fn insert_font(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.fonts.insert(name.clone(), Font { name });
    }

    pub fn insert_clip(&mut self, name: impl Into<String>, clip: ClipMetadata) {
        self.clips.insert(name.into(), clip);
    }

    /// Add a texture (builder pattern).
    #[must_use]
    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.insert_texture(texture);
        self
    }

    /// Add a font (builder pattern).
    #[must_use]
    pub fn with_font(mut self, name: impl Into<String>) -> Self {
        self.insert_font(name);
        self
    }

    /// Add tileset metadata (builder pattern).
    #[must_use]
    pub fn with_clip(mut self, name: impl Into<String>, clip: ClipMetadata) -> Self {
        self.insert_clip(name, clip);
        self
    }
}

impl ResourceProvider for ResourceManager {
    fn texture(&self, name: &str) -> Result<&Texture, ResourceError> {
        self.textures
            .get(name)
            .ok_or_else(|| ResourceError::missing(ResourceKind::Texture, name))
    }

    fn font(&self, name: &str) -> Result<&Font, ResourceError> {
        self.fonts
            .get(name)
            .ok_or_else(|| ResourceError::missing(ResourceKind::Font, name))
    }

    fn clip(&self, name: &str) -> Result<&ClipMetadata, ResourceError> {
        self.clips
            .get(name)
            .ok_or_else(|| ResourceError::missing(ResourceKind::Clip, name))
    }
}
