//! Invader and missile symbols.
//!
//! Invaders are single digits; the command ship is a bonus target that
//! shares the same symbol space so the missile can be aimed at it.

use serde::{Deserialize, Serialize};

/// Character drawn for the command ship.
pub const COMMAND_SHIP_CHAR: char = '∩';

/// Character drawn for an empty window slot.
pub const EMPTY_CHAR: char = ' ';

/// Character drawn for a digit outside `0..=9`.
pub const INVALID_CHAR: char = '?';

/// Something that can occupy a window slot or be aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Regular invader, `0..=9`.
    Digit(u8),
    /// Bonus target.
    CommandShip,
}

impl Symbol {
    /// Missile cycle order used by `aim()`.
    pub const CYCLE: [Symbol; 11] = [
        Symbol::Digit(0),
        Symbol::Digit(1),
        Symbol::Digit(2),
        Symbol::Digit(3),
        Symbol::Digit(4),
        Symbol::Digit(5),
        Symbol::Digit(6),
        Symbol::Digit(7),
        Symbol::Digit(8),
        Symbol::Digit(9),
        Symbol::CommandShip,
    ];

    /// Display character.
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Symbol::Digit(d) => char::from_digit(u32::from(d), 10).unwrap_or(INVALID_CHAR),
            Symbol::CommandShip => COMMAND_SHIP_CHAR,
        }
    }

    #[must_use]
    pub fn is_command_ship(self) -> bool {
        matches!(self, Symbol::CommandShip)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A window slot. `None` is an empty position.
pub type Slot = Option<Symbol>;

/// Display character for a slot.
#[must_use]
pub fn slot_char(slot: Slot) -> char {
    slot.map_or(EMPTY_CHAR, Symbol::to_char)
}
