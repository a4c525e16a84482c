//! # number-match
//!
//! Rules engine for a single-player number-matching arcade game.
//!
//! A column of invaders (digits, occasionally a bonus command ship)
//! advances toward the player. The player aims a cycling missile symbol and
//! fires to destroy a matching invader before any invader reaches the front.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the rules**: all state, scoring, stage progression and
//!    win/loss live in `MatchEngine`. Front ends only call operations and
//!    display projections.
//!
//! 2. **Deterministic**: invaders come from a seeded ChaCha8 stream (or a
//!    scripted digit source), so a seed replays a game exactly.
//!
//! 3. **Injected persistence**: the high score goes through the
//!    `HighScoreStore` trait; the engine never touches files.
//!
//! 4. **Single-threaded**: every operation runs to completion. The driver
//!    serializes ticks and key presses through one execution context.
//!
//! ## Modules
//!
//! - `core`: Symbols, RNG, configuration, snapshots
//! - `rules`: `NumberEngine` trait
//! - `games`: `MatchEngine` implementation
//! - `store`: High-score persistence seam
//! - `driver`: Cooperative scheduler and session
//! - `error`: Store and configuration errors

pub mod core;
pub mod error;
pub mod rules;
pub mod games;
pub mod store;
pub mod driver;

// Re-export commonly used types
pub use crate::core::{
    DifficultyLevel, DriverConfig, EngineConfig,
    GameRng, Slot, Snapshot, Symbol,
};

pub use crate::error::{ConfigError, StoreError};

pub use crate::rules::NumberEngine;

pub use crate::games::number_match::{
    DigitSource, MatchEngine, MatchEngineBuilder, ScriptedDigits,
};

pub use crate::store::{format_score, HighScoreStore, MemoryStore};

pub use crate::driver::{Driver, DriverEvent, Key, Notice, Phase, Scheduler, Tick};
