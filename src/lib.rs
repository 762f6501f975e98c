#![cfg_attr(not(feature = "std"), no_std)]

mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
pub mod input;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use board::*;
#[cfg(feature = "std")]
pub use cli::ConsoleGame;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use input::{InputError, TokenReader};
#[cfg(feature = "std")]
pub use logging::{init_logging, resolve_level};
