use super::board::Cell;
use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// One of the four axis directions a snake can move in.
///
/// The declaration order is the fixed order in which the autopilots consider
/// directions.
#[derive(Clone, Copy, Debug, Deserialize, Enum, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Iterate over all directions in the order Up, Down, Left, Right
    pub fn iter() -> impl Iterator<Item = Direction> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    /// The unit `(col, row)` offset of a single step in this direction
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Return the cell one step from `cell` in this direction.  The result may
    /// lie outside the board.
    pub fn advance(self, cell: Cell) -> Cell {
        cell.neighbor(self)
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse a direction from its initial letter (case-insensitive)
    pub fn from_initial(c: char) -> Option<Direction> {
        match c.to_ascii_uppercase() {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Up, Cell::new(2, 7), Cell::new(2, 6))]
    #[case(Direction::Down, Cell::new(2, 7), Cell::new(2, 8))]
    #[case(Direction::Left, Cell::new(2, 7), Cell::new(1, 7))]
    #[case(Direction::Right, Cell::new(2, 7), Cell::new(3, 7))]
    #[case(Direction::Up, Cell::new(2, 0), Cell::new(2, -1))]
    #[case(Direction::Left, Cell::new(0, 7), Cell::new(-1, 7))]
    fn test_direction_advance(#[case] d: Direction, #[case] cell: Cell, #[case] r: Cell) {
        assert_eq!(d.advance(cell), r);
    }

    #[test]
    fn reverse_is_involution() {
        for d in Direction::iter() {
            assert_ne!(d.reverse(), d);
            assert_eq!(d.reverse().reverse(), d);
            let (dc, dr) = d.offset();
            assert_eq!(d.reverse().offset(), (-dc, -dr));
        }
    }

    #[test]
    fn iteration_order() {
        assert_eq!(
            Direction::iter().collect::<Vec<_>>(),
            [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right
            ]
        );
    }

    #[rstest]
    #[case('u', Some(Direction::Up))]
    #[case('D', Some(Direction::Down))]
    #[case('l', Some(Direction::Left))]
    #[case('R', Some(Direction::Right))]
    #[case('x', None)]
    #[case('.', None)]
    fn test_from_initial(#[case] c: char, #[case] d: Option<Direction>) {
        assert_eq!(Direction::from_initial(c), d);
    }
}
