use super::board::{Board, Cell};
use super::collision::{self, Collision};
use super::direction::Direction;
use super::food::{self, SpawnError};
use super::snake::Snake;
use rand::Rng;

/// What happened to the snake during a single simulation step
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    /// The snake moved one cell without eating
    Moved,
    /// The snake moved onto the food, grew by one segment, and new food was
    /// placed
    Ate,
    /// The move was blocked; the snake was left where it was
    Collided(Collision),
}

/// Advance the snake one cell in `direction`.
///
/// `direction` must already have been vetted against reversals.  If the new
/// head position is blocked, the snake is left untouched.  If the snake eats
/// the food, `food` is replaced with a newly-spawned cell.
///
/// # Errors
///
/// Returns `Err` if the snake ate the food and there is no free cell left in
/// which to place the next one.  The snake has already grown in this case.
pub fn step<R: Rng + ?Sized>(
    board: &Board,
    snake: &mut Snake,
    food: &mut Cell,
    direction: Direction,
    rng: &mut R,
) -> Result<StepOutcome, SpawnError> {
    let new_head = direction.advance(snake.head());
    if let Some(c) = collision::check(board, snake, new_head, true) {
        return Ok(StepOutcome::Collided(c));
    }
    let grows = new_head == *food;
    snake.advance(new_head, grows);
    if grows {
        *food = food::spawn(board, snake, rng)?;
        Ok(StepOutcome::Ate)
    } else {
        Ok(StepOutcome::Moved)
    }
}
