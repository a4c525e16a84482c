//! Kill scoring.
//!
//! Stage 1 pays `[10][20][30][40][50][60]` front to rear, stage 2 pays
//! `[20][30][40][50][60][70]`, and so on. The command ship always pays the
//! same fixed bonus.

use crate::core::{EngineConfig, Symbol};

/// Points for destroying `target` at window `position` during `stage`.
#[must_use]
pub fn kill_points(config: &EngineConfig, target: Symbol, position: usize, stage: u32) -> u32 {
    match target {
        Symbol::CommandShip => config.command_ship_value,
        Symbol::Digit(_) => 10 * (position as u32 + stage),
    }
}
