//! One running game.

use tracing::info;

use crate::cards::CardCatalog;
use crate::core::{AppSettings, FrameTime, GameError};
use crate::events::{EventQueue, GameEvent};
use crate::input::{InputSnapshot, TouchModel};
use crate::render::{DrawTarget, RenderingEngine, ResourceProvider};
use crate::rules::{ActionOutcome, FrameOutcomes, GameResult, GameRulesEngine, RulesEngine};
use crate::scene::{build_scene, Scene};

/// What the owner of a session should do after feeding it input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionSignal {
    Continue,
    /// Back was pressed; the caller decides what pausing means.
    PauseRequested,
}

/// Owns the scene and drives it frame by frame.
///
/// ## Frame order
///
/// 1. `input` (any number of times): queue actions
/// 2. `update`: rules, then the renderer's clock, then pending events
/// 3. `draw`
///
/// ## Example
///
/// ```
/// use horror_deck::cards::CardCatalog;
/// use horror_deck::core::{AppSettings, FrameTime, UVec2};
/// use horror_deck::render::{ClipMetadata, CommandBuffer, ResourceManager, Texture};
/// use horror_deck::core::IntRect;
/// use horror_deck::session::GameSession;
///
/// let strip = |n: u32| ClipMetadata {
///     frame_size: UVec2::new(32, 32),
///     bounds: IntRect::new(0, 0, 32 * n, 32),
///     frame_count: n as usize,
///     spacing: UVec2::default(),
/// };
/// let resources = ResourceManager::new()
///     .with_texture(Texture::new("playbgr.png", 720, 1280))
///     .with_texture(Texture::new("cardbgr.png", 600, 840))
///     .with_texture(Texture::new("icons.png", 32 * 7, 32))
///     .with_clip("icons.clip", strip(7))
///     .with_texture(Texture::new("illustrations.png", 32 * 10, 32))
///     .with_clip("illustrations.clip", strip(10))
///     .with_font("ChunkFive-Regular.ttf");
///
/// let mut session =
///     GameSession::new(&resources, CardCatalog::standard(), &AppSettings::default()).unwrap();
/// assert_eq!(session.update(&FrameTime::at_rate(60), |_| {}), None);
///
/// let mut frame = CommandBuffer::new();
/// session.draw(&mut frame);
/// assert!(!frame.is_empty());
/// ```
#[derive(Debug)]
pub struct GameSession {
    scene: Scene,
    rules: GameRulesEngine,
    renderer: RenderingEngine,
    events: EventQueue<GameEvent>,
    touch: TouchModel,
    pending: InputSnapshot,
    last_outcomes: FrameOutcomes,
    ended: bool,
}

impl GameSession {
    /// Validate settings, build the opening scene and the renderer.
    pub fn new(
        resources: &impl ResourceProvider,
        catalog: &CardCatalog,
        settings: &AppSettings,
    ) -> Result<Self, GameError> {
        settings.validate()?;

        let rules = GameRulesEngine::new(settings.rules.clone());
        let mut scene = build_scene(catalog)?;
        rules.prepare(&mut scene);
        let renderer = RenderingEngine::new(resources, settings)?;

        info!(
            deck = scene.deck.len(),
            hearts = scene.hearts,
            touch_controls = settings.input.show_touch_controls,
            "session started"
        );

        Ok(Self {
            scene,
            rules,
            renderer,
            events: EventQueue::new(),
            touch: TouchModel::new(),
            pending: InputSnapshot::new(),
            last_outcomes: FrameOutcomes::new(),
            ended: false,
        })
    }

    /// Queue a frame's input for the next `update`.
    pub fn input(&mut self, input: InputSnapshot) -> SessionSignal {
        for &action in input.actions() {
            self.pending.push(action);
        }
        if input.back_pressed() {
            SessionSignal::PauseRequested
        } else {
            SessionSignal::Continue
        }
    }

    /// Replace the touch state published by the platform layer.
    pub fn set_touch_model(&mut self, touch: TouchModel) {
        self.touch = touch;
    }

    /// Run one frame and hand every event it produced to `on_event`.
    ///
    /// Returns the result once the game has ended.
    pub fn update<F>(&mut self, time: &FrameTime, mut on_event: F) -> Option<GameResult>
    where
        F: FnMut(&GameEvent),
    {
        let input = std::mem::take(&mut self.pending);
        self.last_outcomes = self.rules.update(&mut self.scene, &input, time, &mut self.events);
        self.renderer.update(time);
        self.events.process_events(&mut on_event);

        let result = self.rules.finished();
        if let Some(result) = result {
            if !self.ended {
                self.ended = true;
                info!(?result, hearts = self.scene.hearts, "session ended");
            }
        }
        result
    }

    pub fn draw(&self, target: &mut impl DrawTarget) {
        self.renderer.draw(&self.scene, &self.touch, target);
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn rules(&self) -> &GameRulesEngine {
        &self.rules
    }

    #[must_use]
    pub fn renderer(&self) -> &RenderingEngine {
        &self.renderer
    }

    /// How each action of the last `update` was handled.
    #[must_use]
    pub fn last_outcomes(&self) -> &[ActionOutcome] {
        &self.last_outcomes
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.ended
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::cards::{CardImage, CardType};
    use crate::core::{IntRect, RulesConfig, SettingsError, UVec2};
    use crate::input::Action;
    use crate::render::{ClipMetadata, CommandBuffer, Icon, ResourceManager, Texture};
    use crate::rules::RejectReason;

    fn strip(count: usize) -> ClipMetadata {
        ClipMetadata {
            frame_size: UVec2::new(32, 32),
            bounds: IntRect::new(0, 0, 32 * count as u32, 32),
            frame_count: count,
            spacing: UVec2::default(),
        }
    }

    fn resources() -> ResourceManager {
        ResourceManager::new()
            .with_texture(Texture::new("playbgr.png", 720, 1280))
            .with_texture(Texture::new("cardbgr.png", 600, 840))
            .with_texture(Texture::new("icons.png", 32 * Icon::COUNT as u32, 32))
            .with_clip("icons.clip", strip(Icon::COUNT))
            .with_texture(Texture::new("illustrations.png", 32 * CardImage::COUNT as u32, 32))
            .with_clip("illustrations.clip", strip(CardImage::COUNT))
            .with_font("ChunkFive-Regular.ttf")
    }

    fn session() -> GameSession {
        GameSession::new(&resources(), CardCatalog::standard(), &AppSettings::default()).unwrap()
    }

    #[test]
    fn test_back_requests_pause() {
        let mut session = session();
        assert_eq!(session.input(InputSnapshot::new()), SessionSignal::Continue);
        assert_eq!(session.input(InputSnapshot::new().with_back()), SessionSignal::PauseRequested);
    }

    #[test]
    fn test_queued_input_applies_on_update() {
        let mut session = session();
        session.input(InputSnapshot::new().with_action(Action::Stash(0)));
        session.input(InputSnapshot::new().with_action(Action::Retrieve(1)));
        assert_eq!(session.scene().deck.len(), 1);

        let mut sounds = Vec::new();
        session.update(&FrameTime::at_rate(60), |e| {
            if let Some(name) = e.sound_name() {
                sounds.push(name.to_string());
            }
        });

        assert_eq!(
            session.last_outcomes(),
            &[
                ActionOutcome::Rejected(RejectReason::SlotOccupied(0)),
                ActionOutcome::Accepted
            ]
        );
        assert_eq!(sounds, ["retrieve.wav"]);
        assert_eq!(session.scene().front().unwrap().card_type, CardType::Shotgun);

        // consumed
        session.update(&FrameTime::at_rate(60), |_| {});
        assert!(session.last_outcomes().is_empty());
    }

    #[test]
    fn test_trashing_last_card_ends_session() {
        let mut session = session();
        session.input(InputSnapshot::new().with_action(Action::Trash));

        let mut events = Vec::new();
        let result = session.update(&FrameTime::at_rate(60), |e| events.push(e.clone()));

        assert_eq!(result, Some(GameResult::DeckCleared));
        assert!(session.is_over());
        assert!(events.contains(&GameEvent::GameEnded { result: GameResult::DeckCleared }));
        assert_eq!(session.update(&FrameTime::at_rate(60), |_| {}), Some(GameResult::DeckCleared));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = AppSettings::default().with_rules(RulesConfig::default().with_max_hearts(0));
        let err = GameSession::new(&resources(), CardCatalog::standard(), &settings).unwrap_err();
        assert!(matches!(err, GameError::Settings(SettingsError::Invalid { .. })));
    }

    #[test]
    fn test_missing_catalog_entry() {
        let err = GameSession::new(&resources(), &CardCatalog::new(), &AppSettings::default())
            .unwrap_err();
        assert!(matches!(err, GameError::Catalog(_)));
    }

    #[test]
    fn test_hearts_clamped_to_config() {
        let settings = AppSettings::default().with_rules(RulesConfig::default().with_max_hearts(3));
        let session = GameSession::new(&resources(), CardCatalog::standard(), &settings).unwrap();
        assert_eq!(session.scene().hearts, 3);
    }

    #[test]
    fn test_draw_reflects_scene() {
        let mut session = session();
        let mut before = CommandBuffer::new();
        session.draw(&mut before);

        session.input(InputSnapshot::new().with_action(Action::Retrieve(0)));
        session.update(&FrameTime::new(Duration::from_millis(16)), |_| {});
        let mut after = CommandBuffer::new();
        session.draw(&mut after);

        assert_ne!(before, after);
    }
}
