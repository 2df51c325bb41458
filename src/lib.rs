pub mod board;
pub mod cell;
pub mod draw;
pub mod game;
pub mod outcome;
pub mod pattern;

pub use board::{Board, FrozenBoardError};
pub use cell::Cell;
pub use game::{Game, Schedule, Transition};
pub use outcome::Outcome;
pub use pattern::PatternError;
