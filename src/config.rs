/// Side length of every square board.
pub const BOARD_SIZE: usize = 5;
/// Ships each player places; every ship occupies a single cell.
pub const NUM_SHIPS: usize = 5;
pub const NUM_PLAYERS: usize = 2;
