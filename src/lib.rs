//! Simulation & autopilot core for a grid-based game of snake.
//!
//! A [`GameSession`] owns the board, the snake, the food, and the score, and
//! advances them one step at a time as the caller reports elapsed time and
//! directional input.  The snake may instead be steered by one of the
//! autopilots in [`ai`].  Drawing the game, reading the keyboard, and storing
//! high scores are left to the caller; [`config`] and [`highscore`] provide
//! file-backed implementations of the latter.
pub mod ai;
pub mod config;
pub mod consts;
pub mod game;
pub mod highscore;
pub use crate::ai::AiMode;
pub use crate::game::{
    Board, BoardConfig, Cell, Direction, GameError, GameSession, SessionState, Snapshot,
    TickIntervals, TickOutcome,
};
