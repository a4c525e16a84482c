//! Driver inputs and outputs.

use super::scheduler::Tick;
use crate::core::Snapshot;

/// Player input, already decoded from whatever the front end reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Start a game, cycle the missile, or play again.
    Aim,
    Fire,
    Quit,
    /// Anything else; ignored.
    Other,
}

impl Key {
    /// Classic console bindings: `.`/`+` aim, Enter fires, Esc/`q` quits.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        match c {
            '.' | '+' => Key::Aim,
            '\n' | '\r' => Key::Fire,
            'q' | 'Q' | '\u{1b}' => Key::Quit,
            _ => Key::Other,
        }
    }
}

/// Everything the driver dispatches into the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverEvent {
    AdvanceTick,
    RefreshTick,
    Key(Key),
}

impl From<Tick> for DriverEvent {
    fn from(tick: Tick) -> Self {
        match tick {
            Tick::Advance => DriverEvent::AdvanceTick,
            Tick::Refresh => DriverEvent::RefreshTick,
        }
    }
}

impl From<Key> for DriverEvent {
    fn from(key: Key) -> Self {
        DriverEvent::Key(key)
    }
}

/// Something the front end should show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// A game just started.
    Started {
        high_score: String,
        invader_count: String,
        missile_count: String,
    },
    /// Play line: missile, lives glyph, invaders.
    Frame(String),
    /// A stage was cleared or lost and play resumes.
    StageSummary(Snapshot),
    GameOver(Snapshot),
}
