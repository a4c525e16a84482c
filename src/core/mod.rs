//! Core engine types: symbols, RNG, configuration, snapshots.
//!
//! These are shared by the engine, the store seam, and the driver.

pub mod rng;
pub mod symbol;
pub mod config;
pub mod state;

pub use rng::GameRng;
pub use symbol::{slot_char, Slot, Symbol, COMMAND_SHIP_CHAR, EMPTY_CHAR, INVALID_CHAR};
pub use config::{DifficultyLevel, DriverConfig, EngineConfig};
pub use state::Snapshot;
