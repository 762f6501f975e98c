//! Common types: players, guess results and board errors.

use core::fmt;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Shot landed on a ship cell.
    Hit,
    /// Shot landed on open water.
    Miss,
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessResult::Hit => write!(f, "hit"),
            GuessResult::Miss => write!(f, "miss"),
        }
    }
}

/// One of the two seats at the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both players in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Player number as shown to users (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    pub(crate) fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column index is out of bounds [0..BOARD_SIZE).
    IndexOutOfBounds { row: usize, col: usize },
    /// A ship already occupies this cell.
    ShipAlreadyPlaced,
    /// Guess was already made at this position.
    AlreadyGuessed,
    /// Requested state change is not a legal cell transition.
    IllegalTransition,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on this cell"),
            BoardError::AlreadyGuessed => write!(f, "Guess was already made at this position"),
            BoardError::IllegalTransition => write!(f, "Illegal cell state transition"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
