//! Invader supply.
//!
//! Each stage attempt draws its invaders up front into a FIFO queue. New
//! window slots are pulled from the queue until it runs dry, after which
//! every new slot is empty. A command ship can be slipped in ahead of the
//! queue; it never consumes supply.

use std::collections::VecDeque;

use crate::core::{GameRng, Slot, Symbol};

/// Produces invader digits.
pub trait DigitSource {
    /// Next digit in `0..=9`.
    fn next_digit(&mut self) -> u8;
}

impl DigitSource for GameRng {
    fn next_digit(&mut self) -> u8 {
        self.gen_digit()
    }
}

/// Replays a fixed digit sequence, cycling when exhausted.
///
/// Useful for reproducing a known invader line.
#[derive(Clone, Debug)]
pub struct ScriptedDigits {
    digits: Vec<u8>,
    next: usize,
}

impl ScriptedDigits {
    /// Create from a sequence of digits.
    ///
    /// # Panics
    ///
    /// Panics if `digits` is empty or holds a value above 9.
    #[must_use]
    pub fn new(digits: &[u8]) -> Self {
        let digits = digits.to_vec();
        assert!(!digits.is_empty(), "Need at least one digit");
        assert!(digits.iter().all(|&d| d <= 9), "Digits must be 0-9");
        Self { digits, next: 0 }
    }
}

impl DigitSource for ScriptedDigits {
    fn next_digit(&mut self) -> u8 {
        let digit = self.digits[self.next];
        self.next = (self.next + 1) % self.digits.len();
        digit
    }
}

/// Invaders not yet pulled into the window.
#[derive(Clone, Debug, Default)]
pub struct InvaderSupply {
    queue: VecDeque<u8>,
}

impl InvaderSupply {
    /// Discard whatever is left and draw `count` fresh invaders.
    pub fn refill(&mut self, count: u32, source: &mut dyn DigitSource) {
        self.queue.clear();
        self.queue.extend((0..count).map(|_| source.next_digit()));
    }

    /// Invaders still waiting to enter the window.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.queue.len() as u32
    }

    /// Produce the slot that enters at the rear of the window.
    ///
    /// Empty once supply is exhausted; a command ship when `bonus` is set;
    /// otherwise the next queued invader.
    pub fn next_slot(&mut self, bonus: bool) -> Slot {
        if self.queue.is_empty() {
            return None;
        }
        if bonus {
            return Some(Symbol::CommandShip);
        }
        self.queue.pop_front().map(Symbol::Digit)
    }
}
