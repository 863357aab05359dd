use super::board::{Board, Cell};
use super::snake::Snake;
use serde::Serialize;

/// What a snake's head ran into
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collision {
    /// The head left the board
    Wall,
    /// The head ran into the snake's own body
    Snake,
}

/// Determine whether moving a snake's head to `cell` would be fatal.
///
/// When `exclude_tail` is true, the snake's tail segment is not considered an
/// obstacle, as it moves out of the way on any move that does not grow the
/// snake.
pub fn check(board: &Board, snake: &Snake, cell: Cell, exclude_tail: bool) -> Option<Collision> {
    if !board.is_in_bounds(cell) {
        return Some(Collision::Wall);
    }
    let occupied = if exclude_tail {
        snake.occupies_excluding_tail(cell)
    } else {
        snake.occupies(cell)
    };
    if occupied {
        Some(Collision::Snake)
    } else {
        None
    }
}

pub fn is_blocked(board: &Board, snake: &Snake, cell: Cell, exclude_tail: bool) -> bool {
    check(board, snake, cell, exclude_tail).is_some()
}
