//! Engine and driver configuration.
//!
//! - `EngineConfig`: stage sizing and scoring constants
//! - `DifficultyLevel`: invader speed presets
//! - `DriverConfig`: cadences for the cooperative driver
//!
//! Defaults reproduce the classic game. Nothing here reads files; a caller
//! that persists settings hands the raw values in.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Stage sizing and scoring constants for the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Invaders in a fresh stage.
    pub invaders_per_stage: u32,

    /// Missiles in a fresh stage.
    pub missiles_per_stage: u32,

    /// Number of visible slots in the invader line.
    pub window_width: usize,

    /// First stage number that is NOT played; reaching it wins the game.
    pub max_stage: u32,

    /// Lives at the start of a game.
    pub starting_lives: u8,

    /// Points for destroying the command ship.
    pub command_ship_value: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            invaders_per_stage: 16,
            missiles_per_stage: 30,
            window_width: 6,
            max_stage: 9,
            starting_lives: 3,
            command_ship_value: 300,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_invaders_per_stage(mut self, count: u32) -> Self {
        self.invaders_per_stage = count;
        self
    }

    #[must_use]
    pub fn with_missiles_per_stage(mut self, count: u32) -> Self {
        self.missiles_per_stage = count;
        self
    }

    /// Set the last playable stage plus one.
    #[must_use]
    pub fn with_max_stage(mut self, stage: u32) -> Self {
        assert!(stage >= 2, "At least one playable stage required");
        self.max_stage = stage;
        self
    }

    #[must_use]
    pub fn with_starting_lives(mut self, lives: u8) -> Self {
        assert!(lives > 0, "Must start with at least 1 life");
        self.starting_lives = lives;
        self
    }

    /// Highest stage number that is actually played.
    #[must_use]
    pub fn last_stage(&self) -> u32 {
        self.max_stage - 1
    }
}

/// Invader speed presets. The value is the advance interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Easy,
    Moderate,
    #[default]
    Original,
    Hard,
}

impl DifficultyLevel {
    /// Milliseconds between invader advances.
    #[must_use]
    pub const fn advance_interval_ms(self) -> u64 {
        match self {
            DifficultyLevel::Easy => 6000,
            DifficultyLevel::Moderate => 3000,
            DifficultyLevel::Original => 1400,
            DifficultyLevel::Hard => 1000,
        }
    }

    /// Resolve a stored setting, falling back to `Original`.
    ///
    /// A missing or blank setting is not an error. An unrecognised one is
    /// logged and ignored so a bad settings file never stops play.
    #[must_use]
    pub fn from_setting(setting: Option<&str>) -> Self {
        match setting.map(str::trim) {
            None | Some("") => Self::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err: ConfigError| {
                log::error!("{err}, using default difficulty");
                Self::default()
            }),
        }
    }
}

impl FromStr for DifficultyLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(DifficultyLevel::Easy),
            "moderate" => Ok(DifficultyLevel::Moderate),
            "original" => Ok(DifficultyLevel::Original),
            "hard" => Ok(DifficultyLevel::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DifficultyLevel::Easy => "Easy",
            DifficultyLevel::Moderate => "Moderate",
            DifficultyLevel::Original => "Original",
            DifficultyLevel::Hard => "Hard",
        };
        f.write_str(name)
    }
}

/// Cadences and engine settings for the cooperative driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Invader speed.
    #[serde(default)]
    pub difficulty: DifficultyLevel,

    /// Milliseconds between display refreshes.
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,

    /// Engine constants used for every game attempt.
    #[serde(default)]
    pub engine: EngineConfig,
}

fn default_refresh_interval_ms() -> u64 {
    200
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            difficulty: DifficultyLevel::default(),
            refresh_interval_ms: default_refresh_interval_ms(),
            engine: EngineConfig::default(),
        }
    }
}

impl DriverConfig {
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: DifficultyLevel) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_refresh_interval_ms(mut self, interval: u64) -> Self {
        assert!(interval > 0, "Refresh interval must be positive");
        self.refresh_interval_ms = interval;
        self
    }

    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }
}
