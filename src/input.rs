#![cfg(feature = "std")]

//! Whitespace-delimited integer input for the console.

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;

use crate::config::BOARD_SIZE;

/// Failures that end an interactive session.
#[derive(Debug)]
pub enum InputError {
    /// Input stream closed before the game finished.
    Exhausted,
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Exhausted => write!(f, "input stream exhausted"),
            InputError::Io(e) => write!(f, "input error: {}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            InputError::Exhausted => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

/// Splits a line-oriented reader into tokens and hands them out one at a time.
///
/// Tokens left on a line stay queued for the next read, so `3 4` on one line
/// answers a row prompt and a column prompt.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next raw token, reading further lines as needed.
    pub fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(tok);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::Exhausted);
            }
            self.pending
                .extend(line.split_whitespace().map(String::from));
        }
    }

    /// Next integer token. Non-integer tokens are discarded one by one, each
    /// answered with a message on `out`.
    pub fn next_int<W: Write>(&mut self, out: &mut W) -> Result<i64, InputError> {
        loop {
            let tok = self.next_token()?;
            match tok.parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => {
                    log::debug!("discarding non-integer token {:?}", tok);
                    writeln!(
                        out,
                        "Invalid input. Please enter a number between 0 and {}:",
                        BOARD_SIZE - 1
                    )?;
                }
            }
        }
    }

    /// Read a (row, col) pair as two integer reads.
    pub fn next_coord<W: Write>(&mut self, out: &mut W) -> Result<(i64, i64), InputError> {
        let row = self.next_int(out)?;
        let col = self.next_int(out)?;
        Ok((row, col))
    }
}
