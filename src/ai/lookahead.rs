use super::{Pilot, Surroundings};
use crate::consts;
use crate::game::{collision, Board, Cell, Direction, Snake};
use log::{debug, trace};
use std::collections::HashSet;

/// Score every safe direction by how close it brings the snake to the food
/// and how much free space it leaves within reach, and take the best.
///
/// A direction's score is `-distance + space_weight * space`, where
/// `distance` is the Euclidean distance from the new head to the food and
/// `space` is the [accessible space][accessible_space] from the new head.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lookahead {
    space_weight: f64,
    max_depth: usize,
}

impl Lookahead {
    pub fn new(snake_len: usize) -> Lookahead {
        Lookahead {
            space_weight: space_weight(snake_len),
            max_depth: consts::FLOOD_FILL_DEPTH,
        }
    }

    /// Limit the flood fill to `max_depth` levels
    pub fn with_max_depth(mut self, max_depth: usize) -> Lookahead {
        self.max_depth = max_depth;
        self
    }

    pub fn space_weight(&self) -> f64 {
        self.space_weight
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Score a move in `direction`.  Returns `None` if the move is fatal or
    /// would reverse the snake.
    pub fn score(&self, view: &Surroundings<'_>, direction: Direction) -> Option<f64> {
        if direction == view.heading.reverse() {
            return None;
        }
        let new_head = direction.advance(view.snake.head());
        if collision::is_blocked(view.board, view.snake, new_head, true) {
            return None;
        }
        let space = accessible_space(view.board, view.snake, new_head, self.max_depth);
        Some(-new_head.distance(view.food) + self.space_weight * count_to_f64(space))
    }
}

impl Pilot for Lookahead {
    fn choose(&self, view: &Surroundings<'_>) -> Option<Direction> {
        let mut best: Option<(Direction, f64)> = None;
        for d in Direction::iter() {
            let Some(score) = self.score(view, d) else {
                trace!("Lookahead pilot ruled out {d:?}");
                continue;
            };
            trace!("Lookahead pilot scored {d:?} at {score:.3}");
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((d, score));
            }
        }
        if let Some((d, score)) = best {
            debug!("Lookahead pilot chose {d:?} (score {score:.3})");
            Some(d)
        } else {
            debug!(
                "Lookahead pilot is boxed in; continuing {:?}",
                view.heading
            );
            Some(view.heading)
        }
    }

    fn food_eaten(&mut self, snake_len: usize) {
        self.space_weight = space_weight(snake_len);
        debug!(
            "Lookahead space weight is now {:.2} for length {snake_len}",
            self.space_weight
        );
    }
}

/// The weight given to accessible space for a snake of the given length.
/// Longer snakes are more easily trapped, so space matters more to them.
pub fn space_weight(snake_len: usize) -> f64 {
    consts::SPACE_WEIGHT_BASE + count_to_f64(snake_len) / consts::SPACE_WEIGHT_LENGTH_SCALE
}

/// Count the free cells reachable from `start` within `max_depth` steps.
///
/// A cell is free if it is on the board and not occupied by the snake
/// (ignoring the tail, which is about to move).  `start` itself counts as
/// the first level; if it is not free, the result is zero.
pub fn accessible_space(board: &Board, snake: &Snake, start: Cell, max_depth: usize) -> usize {
    if collision::is_blocked(board, snake, start, true) {
        return 0;
    }
    let mut visited = HashSet::from([start]);
    let mut frontier = vec![start];
    for _ in 0..max_depth {
        let mut next = Vec::new();
        for cell in frontier {
            for n in Direction::iter().map(|d| d.advance(cell)) {
                if !collision::is_blocked(board, snake, n, true) && visited.insert(n) {
                    next.push(n);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }
    visited.len()
}

fn count_to_f64(n: usize) -> f64 {
    u32::try_from(n).map_or(f64::from(u32::MAX), f64::from)
}
