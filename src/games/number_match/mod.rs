//! Number match: shoot the digit that matches your missile.
//!
//! A line of six slots holds approaching invaders (digits 0-9). The player
//! cycles a missile symbol and fires; the first invader, front to rear,
//! that matches is destroyed. Invaders that reach the front slot cost a
//! life. Clearing all invaders of a stage moves on to the next one; clearing
//! stage 8 wins the game.
//!
//! Destroying invaders at the front, second and third slots on three
//! consecutive hits summons a command ship worth a flat bonus.

mod bonus;
mod game;
mod scoring;
mod supply;

pub use bonus::RecentKills;
pub use game::{MatchEngine, MatchEngineBuilder, Window};
pub use scoring::kill_points;
pub use supply::{DigitSource, InvaderSupply, ScriptedDigits};
