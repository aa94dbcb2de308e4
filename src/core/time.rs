//! Per-frame timing.

use std::time::Duration;

/// Time information for a single frame.
///
/// Produced once per frame by the driver loop and handed to both the rules
/// engine and the rendering engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameTime {
    delta: Duration,
}

impl FrameTime {
    /// Create a frame time from the duration of the previous frame.
    #[must_use]
    pub const fn new(delta: Duration) -> Self {
        Self { delta }
    }

    /// Frame time for a fixed frame rate (e.g. `60` → ~16.6 ms).
    #[must_use]
    pub fn at_rate(frames_per_second: u32) -> Self {
        Self::new(Duration::from_secs(1) / frames_per_second.max(1))
    }

    /// Duration of the previous frame.
    #[must_use]
    pub const fn delta(&self) -> Duration {
        self.delta
    }

    /// Duration of the previous frame in seconds.
    #[must_use]
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_rate() {
        let t = FrameTime::at_rate(50);
        assert_eq!(t.delta(), Duration::from_millis(20));
        assert!((t.delta_secs() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_zero_rate_does_not_divide_by_zero() {
        assert_eq!(FrameTime::at_rate(0).delta(), Duration::from_secs(1));
    }
}
