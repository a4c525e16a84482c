//! High-score persistence seam.
//!
//! The engine only needs to read and write a single score. Where that score
//! lives (a settings file, the registry, a browser's local storage) is the
//! driver's business; it hands the engine something implementing
//! `HighScoreStore`.
//!
//! Scores are persisted as six-digit, zero-padded decimal strings.

mod memory;

pub use memory::MemoryStore;

use crate::error::StoreError;

/// Width of a persisted score.
pub const SCORE_DIGITS: usize = 6;

/// Read/write access to the persisted high score.
pub trait HighScoreStore {
    /// Previously saved high score.
    fn read_high_score(&self) -> Result<u32, StoreError>;

    /// Persist `value` as the high score. Last write wins.
    fn write_high_score(&mut self, value: u32) -> Result<(), StoreError>;
}

/// Format a score the way it is displayed and persisted.
///
/// ```
/// assert_eq!(number_match::store::format_score(1234), "001234");
/// ```
#[must_use]
pub fn format_score(value: u32) -> String {
    format!("{value:0width$}", width = SCORE_DIGITS)
}

/// Parse a persisted score.
///
/// Accepts any all-digit string that fits in a `u32`; a blank value reads
/// as zero so a freshly created settings entry is valid.
pub fn parse_score(raw: &str) -> Result<u32, StoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StoreError::Corrupt { value: raw.to_string() });
    }
    trimmed
        .parse()
        .map_err(|_| StoreError::Corrupt { value: raw.to_string() })
}
