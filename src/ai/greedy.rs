use super::{Pilot, Surroundings};
use crate::game::{collision, Cell, Direction};
use log::debug;
use std::cmp::Ordering;

/// Steer toward the food, taking the first direction in order of preference
/// that does not lead straight into a wall or the snake's body
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Greedy;

impl Greedy {
    /// Return all four directions in order of preference for a snake whose
    /// head is at `head`: the horizontal direction toward the food (if any),
    /// then the vertical direction toward the food (if any), then the rest in
    /// the order Up, Down, Left, Right.
    pub fn priorities(head: Cell, food: Cell) -> Vec<Direction> {
        let mut prio = Vec::with_capacity(4);
        match food.col.cmp(&head.col) {
            Ordering::Less => prio.push(Direction::Left),
            Ordering::Greater => prio.push(Direction::Right),
            Ordering::Equal => (),
        }
        match food.row.cmp(&head.row) {
            Ordering::Less => prio.push(Direction::Up),
            Ordering::Greater => prio.push(Direction::Down),
            Ordering::Equal => (),
        }
        for d in Direction::iter() {
            if !prio.contains(&d) {
                prio.push(d);
            }
        }
        prio
    }
}

impl Pilot for Greedy {
    fn choose(&self, view: &Surroundings<'_>) -> Option<Direction> {
        let head = view.snake.head();
        let backwards = view.heading.reverse();
        let choice = Greedy::priorities(head, view.food)
            .into_iter()
            .filter(|&d| d != backwards)
            .find(|&d| !collision::is_blocked(view.board, view.snake, d.advance(head), true));
        match choice {
            Some(d) => {
                debug!("Greedy pilot chose {d:?}");
                Some(d)
            }
            None => {
                debug!("Greedy pilot is boxed in; continuing {:?}", view.heading);
                Some(view.heading)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, BoardConfig, Snake};
    use rstest::rstest;

    #[rstest]
    #[case(
        Cell::new(5, 5),
        Cell::new(8, 2),
        [Direction::Right, Direction::Up, Direction::Down, Direction::Left]
    )]
    #[case(
        Cell::new(5, 5),
        Cell::new(1, 9),
        [Direction::Left, Direction::Down, Direction::Up, Direction::Right]
    )]
    #[case(
        Cell::new(5, 5),
        Cell::new(5, 9),
        [Direction::Down, Direction::Up, Direction::Left, Direction::Right]
    )]
    #[case(
        Cell::new(5, 5),
        Cell::new(2, 5),
        [Direction::Left, Direction::Up, Direction::Down, Direction::Right]
    )]
    #[case(
        Cell::new(5, 5),
        Cell::new(5, 5),
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    )]
    fn test_priorities(#[case] head: Cell, #[case] food: Cell, #[case] prio: [Direction; 4]) {
        assert_eq!(Greedy::priorities(head, food), prio);
    }

    fn board(width: u32, height: u32) -> Board {
        Board::new(&BoardConfig {
            width,
            height,
            cell_size: 1,
        })
        .unwrap()
    }

    #[test]
    fn heads_for_food() {
        let board = board(10, 10);
        let snake = Snake::new(Cell::new(5, 5));
        let view = Surroundings {
            board: &board,
            snake: &snake,
            food: Cell::new(2, 1),
            heading: Direction::Up,
        };
        assert_eq!(Greedy.choose(&view), Some(Direction::Left));
    }

    #[test]
    fn never_reverses() {
        let board = board(10, 10);
        let snake = Snake::new(Cell::new(5, 5));
        let view = Surroundings {
            board: &board,
            snake: &snake,
            food: Cell::new(5, 8),
            heading: Direction::Up,
        };
        assert_eq!(Greedy.choose(&view), Some(Direction::Up));
    }

    #[test]
    fn sidesteps_body() {
        // Food lies to the right, behind the snake's own body
        let board = board(2, 12);
        let snake = Snake::from_cells([
            Cell::new(0, 8),
            Cell::new(1, 8),
            Cell::new(1, 7),
            Cell::new(1, 6),
        ])
        .unwrap();
        let view = Surroundings {
            board: &board,
            snake: &snake,
            food: Cell::new(1, 9),
            heading: Direction::Left,
        };
        assert_eq!(Greedy.choose(&view), Some(Direction::Down));
    }

    #[test]
    fn sidesteps_wall() {
        let board = board(10, 10);
        let snake = Snake::from_cells([Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]).unwrap();
        let view = Surroundings {
            board: &board,
            snake: &snake,
            food: Cell::new(0, 5),
            heading: Direction::Up,
        };
        assert_eq!(Greedy.choose(&view), Some(Direction::Right));
    }

    #[test]
    fn boxed_in() {
        let board = board(3, 3);
        let snake = Snake::from_cells([
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(0, 1),
            Cell::new(0, 2),
        ])
        .unwrap();
        let view = Surroundings {
            board: &board,
            snake: &snake,
            food: Cell::new(2, 2),
            heading: Direction::Left,
        };
        assert_eq!(Greedy.choose(&view), Some(Direction::Left));
    }
}
