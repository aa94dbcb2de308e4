//! Frame-rate counter for the HUD.

use std::time::Duration;

const WINDOW: Duration = Duration::from_secs(1);

/// Counts frames and reports the rate once per second.
#[derive(Clone, Debug)]
pub struct FpsCounter {
    elapsed: Duration,
    frames: u32,
    text: String,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            elapsed: Duration::ZERO,
            frames: 0,
            text: "FPS: 0".to_string(),
        }
    }
}

impl FpsCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame that took `delta`.
    pub fn update(&mut self, delta: Duration) {
        self.elapsed += delta;
        self.frames += 1;
        if self.elapsed >= WINDOW {
            let fps = f64::from(self.frames) / self.elapsed.as_secs_f64();
            self.text = format!("FPS: {}", fps.round() as u32);
            self.elapsed = Duration::ZERO;
            self.frames = 0;
        }
    }

    /// Current HUD text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
