use core::fmt;

use log::{debug, info};

use crate::{
    board::{is_valid_coord, Board, Cell},
    common::{BoardError, GuessResult, PlayerId},
    config::{NUM_PLAYERS, NUM_SHIPS},
};

/// Current phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// `player` is placing ships on the staging board.
    Placement(PlayerId),
    /// `player` is due to fire.
    Battle(PlayerId),
    /// Terminal: `winner` emptied the opponent's fleet.
    GameOver { winner: PlayerId },
}

/// Why a placement or shot was rejected. The caller retries the same step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate lies outside the board.
    InvalidCoordinates { row: i64, col: i64 },
    /// The placing player already put a ship on this cell.
    AlreadySelected { row: usize, col: usize },
    /// The attacker already fired on this cell.
    AlreadyFired { row: usize, col: usize },
    /// Operation does not belong to the current phase.
    WrongPhase(GameStatus),
    /// Board rejected an update the controller had already validated.
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidCoordinates { .. } => {
                write!(f, "Invalid coordinates. Choose different coordinates.")
            }
            GameError::AlreadySelected { .. } => write!(
                f,
                "You already selected that space. Choose different coordinates."
            ),
            GameError::AlreadyFired { .. } => write!(
                f,
                "You already fired on this spot. Choose different coordinates."
            ),
            GameError::WrongPhase(status) => {
                write!(f, "Operation not allowed in phase {:?}", status)
            }
            GameError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// Outcome of an accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Ship staged; `placed` ships so far for `player`.
    Staged { player: PlayerId, placed: usize },
    /// Final ship staged and the staging board committed to `player`'s ship board.
    Committed { player: PlayerId },
}

/// Outcome of an accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub attacker: PlayerId,
    pub defender: PlayerId,
    pub row: usize,
    pub col: usize,
    pub result: GuessResult,
    /// Set when this shot sank the defender's last ship.
    pub winner: Option<PlayerId>,
}

/// Two-phase game state: placement for each player, then alternating battle.
///
/// Owns every board. A player's ship board and tracking board are separate
/// values, so nothing a player learns can alias their own fleet.
#[derive(Debug, Clone)]
pub struct Game {
    ship_boards: [Board; NUM_PLAYERS],
    tracking_boards: [Board; NUM_PLAYERS],
    staging: Board,
    ships_placed: usize,
    ships_remaining: [usize; NUM_PLAYERS],
    status: GameStatus,
}

impl Game {
    /// Fresh game: all boards empty, player 1 placing.
    pub fn new() -> Self {
        Self {
            ship_boards: [Board::new(); NUM_PLAYERS],
            tracking_boards: [Board::new(); NUM_PLAYERS],
            staging: Board::new(),
            ships_placed: 0,
            ships_remaining: [NUM_SHIPS; NUM_PLAYERS],
            status: GameStatus::Placement(PlayerId::One),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Winner once the game is over.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Player expected to act next, `None` after game over.
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Placement(p) | GameStatus::Battle(p) => Some(p),
            GameStatus::GameOver { .. } => None,
        }
    }

    /// Ground-truth board for `player`.
    pub fn ship_board(&self, player: PlayerId) -> &Board {
        &self.ship_boards[player.index()]
    }

    /// What `player` has learned about the opponent's board.
    pub fn tracking_board(&self, player: PlayerId) -> &Board {
        &self.tracking_boards[player.index()]
    }

    /// Uncommitted placements of the player currently placing.
    pub fn staging_board(&self) -> &Board {
        &self.staging
    }

    /// Ships staged so far by the placing player.
    pub fn ships_placed(&self) -> usize {
        self.ships_placed
    }

    /// Un-hit ships left to `player`.
    pub fn ships_remaining(&self, player: PlayerId) -> usize {
        self.ships_remaining[player.index()]
    }

    /// Stage a ship for the placing player at (`row`, `col`).
    ///
    /// The fifth accepted ship commits the staging board to the player's
    /// ship board, clears staging and hands over to the next phase.
    pub fn place_ship(&mut self, row: i64, col: i64) -> Result<Placement, GameError> {
        let player = match self.status {
            GameStatus::Placement(p) => p,
            other => return Err(GameError::WrongPhase(other)),
        };
        if !is_valid_coord(row, col) {
            debug!("player {} placement rejected: ({}, {}) off board", player, row, col);
            return Err(GameError::InvalidCoordinates { row, col });
        }
        let (r, c) = (row as usize, col as usize);
        if self.staging.get(r, c)? == Cell::Ship {
            debug!("player {} placement rejected: ({}, {}) taken", player, r, c);
            return Err(GameError::AlreadySelected { row: r, col: c });
        }
        self.staging.place_ship(r, c)?;
        self.ships_placed += 1;
        debug!(
            "player {} staged ship {} at ({}, {})",
            player, self.ships_placed, r, c
        );

        if self.ships_placed < NUM_SHIPS {
            return Ok(Placement::Staged {
                player,
                placed: self.ships_placed,
            });
        }

        self.ship_boards[player.index()].copy_from(&self.staging);
        self.staging.reset();
        self.ships_placed = 0;
        self.status = match player {
            PlayerId::One => GameStatus::Placement(PlayerId::Two),
            PlayerId::Two => GameStatus::Battle(PlayerId::One),
        };
        info!("player {} committed fleet; now {:?}", player, self.status);
        Ok(Placement::Committed { player })
    }

    /// Fire at (`row`, `col`) on behalf of the player whose turn it is.
    ///
    /// Rejections leave every board untouched and keep the same attacker.
    pub fn fire(&mut self, row: i64, col: i64) -> Result<Shot, GameError> {
        let attacker = match self.status {
            GameStatus::Battle(p) => p,
            other => return Err(GameError::WrongPhase(other)),
        };
        let defender = attacker.opponent();
        if !is_valid_coord(row, col) {
            debug!("player {} shot rejected: ({}, {}) off board", attacker, row, col);
            return Err(GameError::InvalidCoordinates { row, col });
        }
        let (r, c) = (row as usize, col as usize);
        if self.tracking_boards[attacker.index()].get(r, c)?.is_resolved() {
            debug!("player {} shot rejected: ({}, {}) already fired", attacker, r, c);
            return Err(GameError::AlreadyFired { row: r, col: c });
        }

        let result = self.ship_boards[defender.index()].receive_attack(r, c)?;
        self.tracking_boards[attacker.index()].record_guess(r, c, result)?;
        if result == GuessResult::Hit {
            let remaining = &mut self.ships_remaining[defender.index()];
            *remaining = remaining.saturating_sub(1);
        }
        debug!(
            "player {} fired at ({}, {}): {}; player {} has {} ships left",
            attacker,
            r,
            c,
            result,
            defender,
            self.ships_remaining(defender)
        );

        let winner = if self.ships_remaining(defender) == 0 {
            self.status = GameStatus::GameOver { winner: attacker };
            info!("player {} wins", attacker);
            Some(attacker)
        } else {
            self.status = GameStatus::Battle(defender);
            None
        };
        Ok(Shot {
            attacker,
            defender,
            row: r,
            col: c,
            result,
            winner,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
