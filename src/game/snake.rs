use super::board::Cell;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// The snake is the ordered sequence of cells it occupies, head first.  It is
/// never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snake {
    /// Occupied cells, with the head at the front and the tail at the back
    cells: VecDeque<Cell>,
}

impl Snake {
    /// Create a snake consisting of a single segment at `head`
    pub fn new(head: Cell) -> Snake {
        Snake {
            cells: VecDeque::from([head]),
        }
    }

    /// Create a snake from its cells listed head first.  Returns `None` if
    /// `cells` is empty.
    pub fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Option<Snake> {
        let cells = cells.into_iter().collect::<VecDeque<_>>();
        (!cells.is_empty()).then_some(Snake { cells })
    }

    /// Return the position of the snake's head
    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    /// Return the position of the snake's last segment
    pub fn tail(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over the snake's cells, head first
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Like [`Snake::occupies()`], but ignoring the tail segment, which
    /// vacates its cell on any move that does not grow the snake
    pub fn occupies_excluding_tail(&self, cell: Cell) -> bool {
        self.cells.range(..self.cells.len() - 1).any(|&c| c == cell)
    }

    /// Move the head to `new_head`, dropping the tail unless `grows` is true.
    ///
    /// No checks are performed; the caller is responsible for having already
    /// rejected blocked moves.
    pub fn advance(&mut self, new_head: Cell, grows: bool) {
        self.cells.push_front(new_head);
        if !grows {
            let _ = self.cells.pop_back();
        }
    }
}
