//! Engine trait consumed by drivers.
//!
//! A driver calls `advance` on the invader cadence, `aim`/`attack` on key
//! presses, and polls the projections on the refresh cadence. It must
//! serialize every call into one engine instance.
//!
//! ## Implementation Notes
//!
//! - Operations are total: they never fail and never block
//! - After `game_over()` turns true, `advance`/`attack` must not change
//!   score, stage, or lives
//! - `stage_over()` is raised by the engine and lowered by the driver

use crate::core::state::Snapshot;

/// Number-matching rules engine.
pub trait NumberEngine {
    // === Operations ===

    /// Move invaders one slot toward the player, or resolve an overrun.
    fn advance(&mut self);

    /// Cycle the missile to the next symbol.
    fn aim(&mut self);

    /// Fire the current missile at the first matching invader.
    fn attack(&mut self);

    /// Reset the persisted high score to zero.
    fn clear_high_score(&mut self);

    // === Projections ===

    fn game_over(&self) -> bool;

    fn stage_over(&self) -> bool;

    /// Drivers lower the flag after reacting to a stage transition.
    fn set_stage_over(&mut self, stage_over: bool);

    fn lives(&self) -> u8;

    /// Six-digit, zero-padded score.
    fn score(&self) -> String;

    fn stage(&self) -> String;

    /// Aimed symbol; a space before the first aim.
    fn missile(&self) -> char;

    /// Missiles remaining this stage.
    fn missile_count(&self) -> String;

    /// Invaders in a fresh stage.
    fn invader_count(&self) -> String;

    /// The visible invader line, front first, spaces for empty slots.
    fn invaders(&self) -> String;

    /// Six-digit stored high score.
    fn high_score(&self) -> String;

    /// Capture every projection at once.
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            game_over: self.game_over(),
            stage_over: self.stage_over(),
            lives: self.lives(),
            score: self.score(),
            stage: self.stage(),
            missile: self.missile(),
            missile_count: self.missile_count(),
            invader_count: self.invader_count(),
            invaders: self.invaders(),
            high_score: self.high_score(),
        }
    }
}
