//! Cooperative driver.
//!
//! Everything a front end needs between the terminal and the engine,
//! without touching the terminal: a tick scheduler on a caller-supplied
//! clock, decoded keys, and a session that turns both into engine calls
//! and display notices.
//!
//! ```
//! use number_match::core::DriverConfig;
//! use number_match::driver::{Driver, Key, Phase};
//! use number_match::store::MemoryStore;
//!
//! let mut driver = Driver::new(DriverConfig::default(), MemoryStore::new(), 7);
//! driver.press(Key::Aim, 0);
//! assert_eq!(driver.phase(), Phase::Playing);
//!
//! let notices = driver.pump(1_000);
//! assert!(!notices.is_empty());
//! ```

pub mod event;
pub mod scheduler;
pub mod session;

pub use event::{DriverEvent, Key, Notice};
pub use scheduler::{Scheduler, Tick};
pub use session::{lives_glyph, status_line, Driver, Phase};
