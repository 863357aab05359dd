use super::board::{Board, Cell};
use super::snake::Snake;
use crate::consts;
use log::{debug, warn};
use rand::Rng;
use thiserror::Error;

/// Choose a cell for a new piece of food, uniformly at random among the cells
/// not occupied by `snake`.
///
/// Random cells are sampled up to
/// [`FOOD_SPAWN_ATTEMPTS`][consts::FOOD_SPAWN_ATTEMPTS] times; if all of them
/// land on the snake, the board is scanned for the first free cell instead.
///
/// # Errors
///
/// Returns `Err` if the snake covers the entire board.
pub fn spawn<R: Rng + ?Sized>(
    board: &Board,
    snake: &Snake,
    rng: &mut R,
) -> Result<Cell, SpawnError> {
    for _ in 0..consts::FOOD_SPAWN_ATTEMPTS {
        let cell = board.random_cell(rng);
        if !snake.occupies(cell) {
            debug!("Placed food at ({}, {})", cell.col, cell.row);
            return Ok(cell);
        }
    }
    warn!(
        "No free cell found after {} random picks; scanning board",
        consts::FOOD_SPAWN_ATTEMPTS
    );
    board
        .cells()
        .find(|&c| !snake.occupies(c))
        .ok_or(SpawnError::BoardFull)
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum SpawnError {
    #[error("no free cell left on the board to place food in")]
    BoardFull,
}
