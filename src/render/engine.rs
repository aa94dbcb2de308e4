//! Rendering engine.
//!
//! Built once per session. Construction packs every image into a sprite
//! atlas and resolves the font; any missing resource fails construction.
//! After that, `draw` turns a `Scene` into draw commands without touching
//! it, in a fixed order:
//!
//! 1. world background
//! 2. active card, then inventory thumbnails
//! 3. HUD icons, hearts, frame rate
//! 4. touch overlay (when enabled)

use thiserror::Error;
use tracing::info;

use super::atlas::{AtlasError, SpriteAtlas};
use super::command::{DrawCommand, DrawTarget, View};
use super::fps::FpsCounter;
use super::layout::{Icon, Layout};
use super::resources::{Font, ResourceError, ResourceProvider};
use crate::cards::{Card, CardImage};
use crate::core::{AppSettings, Circle, FrameTime, IntRect, Vec2};
use crate::input::{TouchModel, TouchObjectKind};
use crate::scene::Scene;

pub const FONT: &str = "ChunkFive-Regular.ttf";
pub const BACKGROUND: &str = "playbgr.png";
pub const CARD_BACKGROUND: &str = "cardbgr.png";
pub const ICONS: &str = "icons.png";
pub const ICONS_CLIP: &str = "icons.clip";
pub const ILLUSTRATIONS: &str = "illustrations.png";
pub const ILLUSTRATIONS_CLIP: &str = "illustrations.clip";

/// Side length of the square atlas texture.
pub const ATLAS_SIZE: u32 = 4096;

/// Renderer construction failed.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    Atlas(#[from] AtlasError),
    #[error("tileset {name:?} has {found} frames, {needed} are required")]
    MissingFrames {
        name: &'static str,
        needed: usize,
        found: usize,
    },
}

/// Draws the scene and HUD.
#[derive(Clone, Debug)]
pub struct RenderingEngine {
    show_touch_controls: bool,
    max_hearts: u32,
    layout: Layout,
    atlas: SpriteAtlas,
    font: Font,
    background: IntRect,
    card_background: IntRect,
    icon_frames: Vec<IntRect>,
    illustration_frames: Vec<IntRect>,
    fps: FpsCounter,
}

impl RenderingEngine {
    /// Build the atlas and resolve the font with the default layout.
    pub fn new(resources: &impl ResourceProvider, settings: &AppSettings) -> Result<Self, RenderError> {
        Self::with_layout(resources, settings, Layout::default())
    }

    /// Same as `new` with a custom layout.
    pub fn with_layout(
        resources: &impl ResourceProvider,
        settings: &AppSettings,
        layout: Layout,
    ) -> Result<Self, RenderError> {
        let mut atlas = SpriteAtlas::new(ATLAS_SIZE, ATLAS_SIZE);

        let background = atlas.add_image(resources.texture(BACKGROUND)?)?;
        let card_background = atlas.add_image(resources.texture(CARD_BACKGROUND)?)?;
        let icons = atlas.add_tileset(resources.texture(ICONS)?, resources.clip(ICONS_CLIP)?)?;
        let illustrations = atlas.add_tileset(
            resources.texture(ILLUSTRATIONS)?,
            resources.clip(ILLUSTRATIONS_CLIP)?,
        )?;
        let font = resources.font(FONT)?.clone();

        let icon_frames = frames(&atlas, icons, ICONS, Icon::COUNT)?;
        let illustration_frames = frames(&atlas, illustrations, ILLUSTRATIONS, CardImage::COUNT)?;
        let background = first_frame(&atlas, background);
        let card_background = first_frame(&atlas, card_background);

        info!(images = atlas.len(), font = %font.name, "rendering engine ready");

        Ok(Self {
            show_touch_controls: settings.input.show_touch_controls,
            max_hearts: settings.rules.max_hearts,
            layout,
            atlas,
            font,
            background,
            card_background,
            icon_frames,
            illustration_frames,
            fps: FpsCounter::new(),
        })
    }

    /// Advance the frame-rate counter. No gameplay effect.
    pub fn update(&mut self, time: &FrameTime) {
        self.fps.update(time.delta());
    }

    #[must_use]
    pub fn atlas(&self) -> &SpriteAtlas {
        &self.atlas
    }

    #[must_use]
    pub fn font(&self) -> &Font {
        &self.font
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Atlas region of the world background.
    #[must_use]
    pub fn background_frame(&self) -> IntRect {
        self.background
    }

    /// Atlas region of the card background.
    #[must_use]
    pub fn card_background_frame(&self) -> IntRect {
        self.card_background
    }

    /// Atlas region of an icon.
    #[must_use]
    pub fn icon_frame(&self, icon: Icon) -> IntRect {
        self.icon_frames[icon.frame_index()]
    }

    /// Atlas region of a card illustration.
    #[must_use]
    pub fn illustration_frame(&self, image: CardImage) -> IntRect {
        self.illustration_frames[image.frame_index()]
    }

    /// Draw one frame.
    pub fn draw(&self, scene: &Scene, touch: &TouchModel, target: &mut impl DrawTarget) {
        target.submit(DrawCommand::SetView(View::World));
        self.render_world(scene, target);

        target.submit(DrawCommand::SetView(View::Hud));
        self.render_hud(scene, target);

        if self.show_touch_controls {
            self.render_touch_controls(touch, target);
        }
    }

    /// Draw a card with its top-left corner at `position`, every offset and
    /// size multiplied by `scale`.
    pub fn draw_card(&self, card: &Card, position: Vec2, scale: f32, target: &mut impl DrawTarget) {
        let layout = &self.layout.card;
        let at = |offset: Vec2| position + offset * scale;

        target.submit(DrawCommand::sprite(self.card_background, position, scale));
        target.submit(DrawCommand::sprite(
            self.illustration_frame(card.image),
            at(layout.illustration),
            scale,
        ));

        let ammo = self.icon_frame(Icon::Ammo);
        for i in 0..card.ammo {
            let offset = layout.ammo_origin + Vec2::new(0.0, i as f32 * layout.ammo_step);
            target.submit(DrawCommand::sprite(ammo, at(offset), scale));
        }

        let power = self.icon_frame(Icon::Power);
        for i in 0..card.power {
            let offset = layout.power_origin + Vec2::new(i as f32 * layout.power_step, 0.0);
            target.submit(DrawCommand::sprite(power, at(offset), scale));
        }

        for (i, line) in card.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let size = if i == 0 { layout.name_size } else { layout.text_size };
            let offset = layout.text_origin + Vec2::new(0.0, i as f32 * layout.line_step);
            target.submit(DrawCommand::Text {
                content: line.to_string(),
                position: at(offset),
                size: size * scale,
                color: self.layout.palette.card_text,
            });
        }
    }

    fn render_world(&self, scene: &Scene, target: &mut impl DrawTarget) {
        target.submit(DrawCommand::sprite(self.background, Vec2::ZERO, 1.0));

        if let Some(card) = scene.front() {
            self.draw_card(card, self.layout.active_card, self.layout.active_scale, target);
        }
        for (card, &position) in scene.inventory.slots().zip(self.layout.inventory.iter()) {
            if let Some(card) = card {
                self.draw_card(card, position, self.layout.inventory_scale, target);
            }
        }
    }

    fn render_hud(&self, scene: &Scene, target: &mut impl DrawTarget) {
        let hud = &self.layout.hud;
        let skip = if scene.front_bites() { Icon::SkipDanger } else { Icon::SkipSafe };

        target.submit(DrawCommand::sprite(self.icon_frame(Icon::Pause), hud.pause, 1.0));
        target.submit(DrawCommand::sprite(self.icon_frame(skip), hud.skip, 1.0));
        target.submit(DrawCommand::sprite(self.icon_frame(Icon::Trash), hud.trash, 1.0));

        let heart = self.icon_frame(Icon::Heart);
        let shown = scene.hearts.min(self.max_hearts).min(hud.heart_slots);
        for i in 0..shown {
            let position = hud.hearts_origin + Vec2::new(i as f32 * hud.heart_step, 0.0);
            target.submit(DrawCommand::sprite(heart, position, 1.0));
        }

        target.submit(DrawCommand::Text {
            content: self.fps.text().to_string(),
            position: hud.fps,
            size: hud.fps_size,
            color: self.layout.palette.fps,
        });
    }

    fn render_touch_controls(&self, touch: &TouchModel, target: &mut impl DrawTarget) {
        let palette = &self.layout.palette;
        for object in &touch.objects {
            target.submit(DrawCommand::Circle {
                circle: object.touch_area,
                color: palette.touch_area,
            });
            if object.kind == TouchObjectKind::Joystick {
                target.submit(DrawCommand::Circle {
                    circle: Circle::new(object.touch_position, self.layout.hud.thumb_radius),
                    color: palette.touch_thumb,
                });
            }
        }
    }
}

fn frames(
    atlas: &SpriteAtlas,
    location: super::atlas::AtlasLocation,
    name: &'static str,
    needed: usize,
) -> Result<Vec<IntRect>, RenderError> {
    let clip = atlas.clip(location);
    if clip.frame_count() < needed {
        return Err(RenderError::MissingFrames {
            name,
            needed,
            found: clip.frame_count(),
        });
    }
    Ok((0..needed).filter_map(|i| clip.frame(i)).collect())
}

fn first_frame(atlas: &SpriteAtlas, location: super::atlas::AtlasLocation) -> IntRect {
    atlas.clip(location).frame(0).unwrap_or_default()
}
