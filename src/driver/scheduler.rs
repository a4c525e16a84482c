//! Cooperative tick scheduler.
//!
//! Replaces two free-running timers with deadlines on a caller-supplied
//! clock. The driver asks which ticks are due and runs them one after the
//! other on its own thread, so engine calls are never concurrent.

/// Kind of periodic work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tick {
    /// Invaders move.
    Advance,
    /// Display is redrawn.
    Refresh,
}

/// Two fixed cadences on a millisecond clock.
#[derive(Clone, Debug)]
pub struct Scheduler {
    advance_interval_ms: u64,
    refresh_interval_ms: u64,
    /// `None` while stopped.
    next_advance: Option<u64>,
    next_refresh: Option<u64>,
}

impl Scheduler {
    /// Create a stopped scheduler.
    #[must_use]
    pub fn new(advance_interval_ms: u64, refresh_interval_ms: u64) -> Self {
        assert!(advance_interval_ms > 0, "Advance interval must be positive");
        assert!(refresh_interval_ms > 0, "Refresh interval must be positive");
        Self {
            advance_interval_ms,
            refresh_interval_ms,
            next_advance: None,
            next_refresh: None,
        }
    }

    /// (Re)start both cadences; the first ticks fall one interval after `now`.
    pub fn start(&mut self, now_ms: u64) {
        self.next_advance = Some(now_ms + self.advance_interval_ms);
        self.next_refresh = Some(now_ms + self.refresh_interval_ms);
        log::debug!("timers enabled");
    }

    pub fn stop(&mut self) {
        self.next_advance = None;
        self.next_refresh = None;
        log::debug!("timers disabled");
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_advance.is_some()
    }

    /// Pop the earliest tick whose deadline is at or before `now`.
    ///
    /// On equal deadlines the advance tick comes first.
    pub fn next_due(&mut self, now_ms: u64) -> Option<Tick> {
        let (advance, refresh) = (self.next_advance?, self.next_refresh?);
        let (tick, deadline) = if advance <= refresh {
            (Tick::Advance, advance)
        } else {
            (Tick::Refresh, refresh)
        };
        if deadline > now_ms {
            return None;
        }

        match tick {
            Tick::Advance => self.next_advance = Some(advance + self.advance_interval_ms),
            Tick::Refresh => self.next_refresh = Some(refresh + self.refresh_interval_ms),
        }
        Some(tick)
    }

    /// Every tick due at `now`, oldest first.
    pub fn due(&mut self, now_ms: u64) -> Vec<Tick> {
        std::iter::from_fn(|| self.next_due(now_ms)).collect()
    }
}
