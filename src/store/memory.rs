//! In-memory high-score store.

use std::cell::RefCell;
use std::rc::Rc;

use super::{format_score, parse_score, HighScoreStore};
use crate::error::StoreError;

/// Shared in-memory store.
///
/// Clones share one underlying value, so a driver can keep a handle while
/// each game attempt's engine writes through its own clone. The value is
/// kept in its persisted string form.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    value: Rc<RefCell<String>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_raw(format_score(0))
    }
}

impl MemoryStore {
    /// Create a store holding a zero high score.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `score`.
    #[must_use]
    pub fn with_score(score: u32) -> Self {
        Self::with_raw(format_score(score))
    }

    /// Create a store holding an arbitrary persisted string.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            value: Rc::new(RefCell::new(raw.into())),
        }
    }

    /// Persisted string, exactly as stored.
    #[must_use]
    pub fn raw(&self) -> String {
        self.value.borrow().clone()
    }
}

impl HighScoreStore for MemoryStore {
    fn read_high_score(&self) -> Result<u32, StoreError> {
        parse_score(&self.value.borrow())
    }

    fn write_high_score(&mut self, value: u32) -> Result<(), StoreError> {
        *self.value.borrow_mut() = format_score(value);
        Ok(())
    }
}
