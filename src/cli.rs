//! Console driver: prompts, rejections, reports and board display for a
//! two-player game sharing one input stream.

#![cfg(feature = "std")]

use std::io::{BufRead, Write};

use crate::{
    board::Board,
    common::{GuessResult, PlayerId},
    game::{Game, GameStatus, Placement, Shot},
    input::TokenReader,
};

/// A [`Game`] wired to a reader and a writer.
pub struct ConsoleGame<R, W> {
    game: Game,
    input: TokenReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            game: Game::new(),
            input: TokenReader::new(input),
            out,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Play a full game and return the winner.
    ///
    /// Fails only when input runs out or the writer errors.
    pub fn run(&mut self) -> anyhow::Result<PlayerId> {
        writeln!(self.out, "Welcome to Battleship!\n")?;
        loop {
            match self.game.status() {
                GameStatus::Placement(player) => self.placement_phase(player)?,
                GameStatus::Battle(player) => self.battle_turn(player)?,
                GameStatus::GameOver { winner } => {
                    self.game_over(winner)?;
                    return Ok(winner);
                }
            }
        }
    }

    fn placement_phase(&mut self, player: PlayerId) -> anyhow::Result<()> {
        writeln!(
            self.out,
            "PLAYER {}, ENTER YOUR SHIPS' COORDINATES.",
            player
        )?;
        loop {
            writeln!(
                self.out,
                "Enter ship {} location:",
                self.game.ships_placed() + 1
            )?;
            let (row, col) = self.input.next_coord(&mut self.out)?;
            match self.game.place_ship(row, col) {
                Ok(Placement::Staged { .. }) => {}
                Ok(Placement::Committed { player }) => {
                    // Shown on the shared console right after placement.
                    let board = *self.game.ship_board(player);
                    self.print_board(&board)?;
                    return Ok(());
                }
                Err(e) => writeln!(self.out, "{}", e)?,
            }
        }
    }

    /// One battle turn; retries the same attacker until a shot is accepted.
    fn battle_turn(&mut self, attacker: PlayerId) -> anyhow::Result<()> {
        loop {
            writeln!(self.out, "Player {}, enter hit row/column:", attacker)?;
            let (row, col) = self.input.next_coord(&mut self.out)?;
            match self.game.fire(row, col) {
                Ok(shot) => return self.report_shot(&shot),
                Err(e) => writeln!(self.out, "{}", e)?,
            }
        }
    }

    fn report_shot(&mut self, shot: &Shot) -> anyhow::Result<()> {
        match shot.result {
            GuessResult::Hit => writeln!(
                self.out,
                "PLAYER {} HIT PLAYER {}'s SHIP!",
                shot.attacker, shot.defender
            )?,
            GuessResult::Miss => writeln!(
                self.out,
                "PLAYER {} MISSED PLAYER {}!",
                shot.attacker, shot.defender
            )?,
        }
        let tracking = *self.game.tracking_board(shot.attacker);
        self.print_board(&tracking)
    }

    fn game_over(&mut self, winner: PlayerId) -> anyhow::Result<()> {
        writeln!(self.out, "PLAYER {} WINS!", winner)?;
        writeln!(self.out, "\nFinal boards:\n")?;
        for player in PlayerId::ALL {
            writeln!(self.out, "Player {}:\n", player)?;
            let board = *self.game.ship_board(player);
            self.print_board(&board)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn print_board(&mut self, board: &Board) -> anyhow::Result<()> {
        writeln!(self.out, "{}", board)?;
        Ok(())
    }
}
