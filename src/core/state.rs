//! Read-only view of a game for display.
//!
//! `Snapshot` bundles every projection a driver renders. It is recomputed on
//! demand and never fed back into the engine.

use serde::{Deserialize, Serialize};

/// All driver-visible projections at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub game_over: bool,
    pub stage_over: bool,
    pub lives: u8,
    /// Six-digit score.
    pub score: String,
    pub stage: String,
    /// Currently aimed symbol, or a space before the first aim.
    pub missile: char,
    /// Missiles left this stage.
    pub missile_count: String,
    /// Invaders in a fresh stage.
    pub invader_count: String,
    /// The invader line, front first.
    pub invaders: String,
    /// Six-digit stored high score.
    pub high_score: String,
}
