//! Commonly used types and utilities for ease of import.

pub use crate::{
    is_valid_coord, Board, Cell, Game, GameError, GameStatus, GuessResult, PlayerId, BOARD_SIZE,
    NUM_SHIPS,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ConsoleGame};
