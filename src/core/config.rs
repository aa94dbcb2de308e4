//! Session configuration.
//!
//! - `VideoSettings`: target resolution
//! - `InputSettings`: touch overlay toggle
//! - `RulesConfig`: gameplay tuning (hearts, bite timing, sound cues)
//! - `AppSettings`: combines all configuration
//!
//! Every field has a default, so a settings file only needs to name what it
//! overrides:
//!
//! ```
//! use horror_deck::core::AppSettings;
//!
//! let settings = AppSettings::from_toml_str(r#"
//!     [input]
//!     show_touch_controls = true
//!
//!     [rules]
//!     bite_delay_secs = 2.5
//! "#).unwrap();
//!
//! assert!(settings.input.show_touch_controls);
//! assert_eq!(settings.rules.max_hearts, 5);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::UVec2;

/// Resolution the layout is authored for. Backends scale this to the window.
pub const INTERNAL_GAME_RESOLUTION: UVec2 = UVec2::new(720, 1280);

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Display configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSettings {
    /// Window resolution in pixels.
    pub resolution: UVec2,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            resolution: INTERNAL_GAME_RESOLUTION,
        }
    }
}

/// Input configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Draw the touch-control overlay on top of the HUD.
    pub show_touch_controls: bool,
}

/// Names of the sounds requested by the rules engine.
///
/// The names are resource keys; the session owner resolves and plays them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundCues {
    pub skip: String,
    pub trash: String,
    pub stash: String,
    pub retrieve: String,
    pub bite: String,
}

impl Default for SoundCues {
    fn default() -> Self {
        Self {
            skip: "skip.wav".to_string(),
            trash: "trash.wav".to_string(),
            stash: "stash.wav".to_string(),
            retrieve: "retrieve.wav".to_string(),
            bite: "bite.wav".to_string(),
        }
    }
}

/// Gameplay tuning for `GameRulesEngine`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Upper bound for `Scene::hearts`. Also the starting heart count.
    pub max_hearts: u32,

    /// Seconds a biting card may stay on top of the deck before it costs a
    /// heart. The timer restarts after every bite.
    pub bite_delay_secs: f32,

    /// Sound cue names.
    pub sounds: SoundCues,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_hearts: 5,
            bite_delay_secs: 5.0,
            sounds: SoundCues::default(),
        }
    }
}

impl RulesConfig {
    /// Set the heart limit (builder pattern).
    #[must_use]
    pub fn with_max_hearts(mut self, max_hearts: u32) -> Self {
        self.max_hearts = max_hearts;
        self
    }

    /// Set the bite delay (builder pattern).
    #[must_use]
    pub fn with_bite_delay(mut self, delay: Duration) -> Self {
        self.bite_delay_secs = delay.as_secs_f32();
        self
    }

    /// Bite delay as a `Duration`.
    ///
    /// Values `validate` rejects never map to zero: delays too long for a
    /// `Duration` become `Duration::MAX`, anything else invalid does too.
    #[must_use]
    pub fn bite_delay(&self) -> Duration {
        match Duration::try_from_secs_f32(self.bite_delay_secs) {
            Ok(delay) if !delay.is_zero() => delay,
            _ => Duration::MAX,
        }
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if !self.bite_delay_secs.is_finite() || self.bite_delay_secs <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "rules.bite_delay_secs",
                reason: format!("must be a positive number, got {}", self.bite_delay_secs),
            });
        }
        if Duration::try_from_secs_f32(self.bite_delay_secs).map_or(true, |d| d.is_zero()) {
            return Err(SettingsError::Invalid {
                field: "rules.bite_delay_secs",
                reason: format!("{} seconds is not a representable delay", self.bite_delay_secs),
            });
        }
        if self.max_hearts == 0 {
            return Err(SettingsError::Invalid {
                field: "rules.max_hearts",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Complete application configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub video: VideoSettings,
    pub input: InputSettings,
    pub rules: RulesConfig,
}

impl AppSettings {
    /// Parse and validate settings from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
        let settings: AppSettings = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Enable the touch overlay (builder pattern).
    #[must_use]
    pub fn with_touch_controls(mut self, show: bool) -> Self {
        self.input.show_touch_controls = show;
        self
    }

    /// Replace the rules configuration (builder pattern).
    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.video.resolution.x == 0 || self.video.resolution.y == 0 {
            return Err(SettingsError::Invalid {
                field: "video.resolution",
                reason: "both dimensions must be non-zero".to_string(),
            });
        }
        self.rules.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.video.resolution, INTERNAL_GAME_RESOLUTION);
        assert!(!settings.input.show_touch_controls);
        assert_eq!(settings.rules.max_hearts, 5);
        assert_eq!(settings.rules.bite_delay(), Duration::from_secs(5));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        let settings = AppSettings::from_toml_str("").unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_partial_override() {
        let settings = AppSettings::from_toml_str(
            r#"
            [video]
            resolution = { x = 1080, y = 1920 }

            [rules.sounds]
            bite = "growl.ogg"
            "#,
        )
        .unwrap();

        assert_eq!(settings.video.resolution, UVec2::new(1080, 1920));
        assert_eq!(settings.rules.sounds.bite, "growl.ogg");
        assert_eq!(settings.rules.sounds.skip, "skip.wav");
    }

    #[test]
    fn test_rejects_negative_bite_delay() {
        let err = AppSettings::from_toml_str("[rules]\nbite_delay_secs = -1.0").unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "rules.bite_delay_secs", .. }));
    }

    #[test]
    fn test_rejects_unrepresentable_bite_delay() {
        let err = AppSettings::from_toml_str("[rules]\nbite_delay_secs = 1e20").unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "rules.bite_delay_secs", .. }));

        let err = AppSettings::from_toml_str("[rules]\nbite_delay_secs = 1e-30").unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "rules.bite_delay_secs", .. }));
    }

    #[test]
    fn test_out_of_range_bite_delay_is_never_zero() {
        let mut rules = RulesConfig::default();
        rules.bite_delay_secs = 1e20;
        assert_eq!(rules.bite_delay(), Duration::MAX);

        rules.bite_delay_secs = f32::NAN;
        assert_eq!(rules.bite_delay(), Duration::MAX);
    }

    #[test]
    fn test_rejects_zero_hearts() {
        let err = AppSettings::from_toml_str("[rules]\nmax_hearts = 0").unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "rules.max_hearts", .. }));
    }

    #[test]
    fn test_parse_error() {
        let err = AppSettings::from_toml_str("[video\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AppSettings::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn test_builders() {
        let settings = AppSettings::default()
            .with_touch_controls(true)
            .with_rules(RulesConfig::default().with_max_hearts(3).with_bite_delay(Duration::from_secs(2)));

        assert!(settings.input.show_touch_controls);
        assert_eq!(settings.rules.max_hearts, 3);
        assert_eq!(settings.rules.bite_delay(), Duration::from_secs(2));
    }
}
