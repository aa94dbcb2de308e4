//! Headless driver: runs a scripted game against in-memory resources and
//! prints what happened.
//!
//! Usage: `deck_sim [settings.toml]`. Log level comes from `LOG_LEVEL`
//! (default `info`).

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use horror_deck::core::{AppSettings, FrameTime, IntRect, UVec2};
use horror_deck::input::{Action, InputSnapshot};
use horror_deck::render::{ClipMetadata, CommandBuffer, ResourceManager, Texture};
use horror_deck::{CardCatalog, GameEvent, GameSession, SessionSignal};

const FRAME_RATE: u32 = 60;
const MAX_FRAMES: u32 = 60 * FRAME_RATE;

fn init_logging() {
    let filter = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn strip(frame: u32, count: u32) -> ClipMetadata {
    ClipMetadata {
        frame_size: UVec2::new(frame, frame),
        bounds: IntRect::new(0, 0, frame * count, frame),
        frame_count: count as usize,
        spacing: UVec2::default(),
    }
}

/// Stand-ins for the files a real backend would load.
fn resources() -> ResourceManager {
    ResourceManager::new()
        .with_texture(Texture::new("playbgr.png", 720, 1280))
        .with_texture(Texture::new("cardbgr.png", 600, 840))
        .with_texture(Texture::new("icons.png", 48 * 7, 48))
        .with_clip("icons.clip", strip(48, 7))
        .with_texture(Texture::new("illustrations.png", 480 * 5, 600 * 2))
        .with_clip(
            "illustrations.clip",
            ClipMetadata {
                frame_size: UVec2::new(480, 600),
                bounds: IntRect::new(0, 0, 480 * 5, 600 * 2),
                frame_count: 10,
                spacing: UVec2::default(),
            },
        )
        .with_font("ChunkFive-Regular.ttf")
}

/// Input for frame `n`: a move every half second, then nothing.
fn scripted_input(frame: u32) -> InputSnapshot {
    const SCRIPT: [Action; 8] = [
        Action::Retrieve(0),
        Action::Skip,
        Action::Stash(0),
        Action::Stash(0),
        Action::Retrieve(1),
        Action::Trash,
        Action::Trash,
        Action::Trash,
    ];
    let step = FRAME_RATE / 2;
    if frame % step != 0 {
        return InputSnapshot::new();
    }
    match SCRIPT.get((frame / step) as usize) {
        Some(&action) => InputSnapshot::new().with_action(action),
        None => InputSnapshot::new(),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let settings = match std::env::args().nth(1) {
        Some(path) => AppSettings::load(&path).with_context(|| format!("loading {path}"))?,
        None => AppSettings::default(),
    };

    let mut session = GameSession::new(&resources(), CardCatalog::standard(), &settings)
        .context("starting session")?;
    let time = FrameTime::at_rate(FRAME_RATE);
    let mut frame_buffer = CommandBuffer::new();
    let mut sounds = Vec::new();

    let mut frames = 0;
    let mut result = None;
    while frames < MAX_FRAMES && result.is_none() {
        if session.input(scripted_input(frames)) == SessionSignal::PauseRequested {
            break;
        }
        result = session.update(&time, |event| {
            if let GameEvent::PlaySound { sound_name } = event {
                sounds.push(sound_name.clone());
            }
        });
        frame_buffer.clear();
        session.draw(&mut frame_buffer);
        frames += 1;
    }

    println!("frames:        {frames}");
    println!("result:        {result:?}");
    println!("hearts:        {}", session.scene().hearts);
    println!("deck:          {}", session.scene().deck.len());
    println!("inventory:     {}/3", session.scene().inventory.occupied());
    println!("sounds:        {}", sounds.join(", "));
    println!("last frame:    {} draw commands", frame_buffer.len());
    Ok(())
}
