//! Tic-tac-toe state shared by the game ensemble
//!
//! - [`board`]: cells, marks, rendering
//! - [`outcome`]: win/draw detection
//! - [`token`]: the turn token guarding the board
//! - [`strategy`]: pluggable move selection

pub mod board;
pub mod outcome;
pub mod strategy;
pub mod token;

pub use board::{Board, Cell, Mark};
pub use outcome::{check_outcome, Outcome};
pub use token::{Move, PlayerId, Turn, TurnToken};
