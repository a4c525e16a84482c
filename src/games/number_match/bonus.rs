//! Command ship trigger.
//!
//! Remembers where the last three invaders were destroyed. When those
//! positions, oldest first, are front, second, third (0, 1, 2), the next
//! slot produced is a command ship.

const PATTERN: [Option<usize>; 3] = [Some(0), Some(1), Some(2)];

/// Ring of the last three destroyed window positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentKills {
    /// `None` until three kills have been recorded.
    positions: [Option<usize>; 3],
    /// Next write index; also the oldest entry.
    cursor: usize,
}

impl Default for RecentKills {
    fn default() -> Self {
        Self {
            positions: [None; 3],
            cursor: 0,
        }
    }
}

impl RecentKills {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all kills.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a kill at `position`, overwriting the oldest.
    pub fn record(&mut self, position: usize) {
        self.positions[self.cursor] = Some(position);
        self.cursor = (self.cursor + 1) % 3;
        log::debug!("recent kills: {:?}", self.chronological());
    }

    /// Positions oldest first.
    #[must_use]
    pub fn chronological(&self) -> [Option<usize>; 3] {
        [
            self.positions[self.cursor],
            self.positions[(self.cursor + 1) % 3],
            self.positions[(self.cursor + 2) % 3],
        ]
    }

    /// True when the last three kills were at 0, 1, 2 in that order.
    #[must_use]
    pub fn bonus_earned(&self) -> bool {
        self.chronological() == PATTERN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ring_not_earned() {
        assert!(!RecentKills::new().bonus_earned());
    }

    #[test]
    fn test_two_kills_not_enough() {
        // Unfilled entries must not stand in for a kill at the front
        let mut kills = RecentKills::new();
        kills.record(1);
        kills.record(2);
        assert!(!kills.bonus_earned());
    }

    #[test]
    fn test_pattern_earns_bonus() {
        let mut kills = RecentKills::new();
        kills.record(0);
        kills.record(1);
        kills.record(2);
        assert!(kills.bonus_earned());
    }

    #[test]
    fn test_wrong_order_does_not_earn() {
        let mut kills = RecentKills::new();
        kills.record(2);
        kills.record(1);
        kills.record(0);
        assert!(!kills.bonus_earned());
    }

    #[test]
    fn test_only_last_three_count() {
        let mut kills = RecentKills::new();
        for pos in [5, 0, 1, 2] {
            kills.record(pos);
        }
        assert!(kills.bonus_earned());

        kills.record(3);
        assert!(!kills.bonus_earned());
        assert_eq!(kills.chronological(), [Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_pattern_across_wraparound() {
        let mut kills = RecentKills::new();
        for pos in [4, 4, 0, 1, 2] {
            kills.record(pos);
        }
        assert!(kills.bonus_earned());
    }

    #[test]
    fn test_reset() {
        let mut kills = RecentKills::new();
        kills.record(0);
        kills.record(1);
        kills.record(2);
        kills.reset();
        assert!(!kills.bonus_earned());
    }
}
