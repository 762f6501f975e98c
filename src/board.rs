//! Fixed-size grid of cell states used for ship, tracking and staging boards.

use core::fmt;

use crate::common::{BoardError, GuessResult};
use crate::config::BOARD_SIZE;

/// State of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    /// Glyph used when rendering the cell.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Ship => '@',
            Cell::Hit => 'X',
            Cell::Miss => 'O',
        }
    }

    /// `true` once a shot has resolved on this cell.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Returns `true` when (`row`, `col`) lies on the board.
///
/// Takes signed values so raw user input can be checked before conversion.
pub fn is_valid_coord(row: i64, col: i64) -> bool {
    let n = BOARD_SIZE as i64;
    (0..n).contains(&row) && (0..n).contains(&col)
}

/// An N×N grid of [`Cell`]s, stored by value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board with every cell `Empty`.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Set every cell back to `Empty`.
    pub fn reset(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(Cell::Empty);
        }
    }

    /// Overwrite every cell of `self` with the matching cell of `source`.
    pub fn copy_from(&mut self, source: &Board) {
        self.cells = source.cells;
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(BoardError::IndexOutOfBounds { row, col })
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, BoardError> {
        self.cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(BoardError::IndexOutOfBounds { row, col })
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == state)
            .count()
    }

    /// Mark (`row`, `col`) as holding a ship. Only `Empty` cells accept one.
    pub fn place_ship(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let cell = self.cell_mut(row, col)?;
        match *cell {
            Cell::Empty => {
                *cell = Cell::Ship;
                Ok(())
            }
            Cell::Ship => Err(BoardError::ShipAlreadyPlaced),
            Cell::Hit | Cell::Miss => Err(BoardError::IllegalTransition),
        }
    }

    /// Resolve an incoming shot against this ship board.
    pub fn receive_attack(&mut self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        let cell = self.cell_mut(row, col)?;
        match *cell {
            Cell::Ship => {
                *cell = Cell::Hit;
                Ok(GuessResult::Hit)
            }
            Cell::Empty => {
                *cell = Cell::Miss;
                Ok(GuessResult::Miss)
            }
            Cell::Hit | Cell::Miss => Err(BoardError::AlreadyGuessed),
        }
    }

    /// Record the outcome of one of our own shots on a tracking board.
    /// Tracking boards never hold `Ship`.
    pub fn record_guess(
        &mut self,
        row: usize,
        col: usize,
        result: GuessResult,
    ) -> Result<(), BoardError> {
        let cell = self.cell_mut(row, col)?;
        if *cell != Cell::Empty {
            return Err(BoardError::AlreadyGuessed);
        }
        *cell = match result {
            GuessResult::Hit => Cell::Hit,
            GuessResult::Miss => Cell::Miss,
        };
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Renders the grid: a column header line followed by one line per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {}", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{}", r)?;
            for cell in row {
                write!(f, " {}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        write!(f, "{}", self)?;
        write!(f, "}}")
    }
}
