use super::direction::Direction;
use crate::consts;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A position on the board, measured in whole cells from the top-left corner.
///
/// Coordinates are signed so that the neighbours of edge cells (which lie
/// outside the board) can be represented and rejected by
/// [`Board::is_in_bounds()`].
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Cell {
        Cell { col, row }
    }

    /// Return the adjacent cell in the given direction
    pub fn neighbor(self, direction: Direction) -> Cell {
        let (dc, dr) = direction.offset();
        Cell {
            col: self.col.saturating_add(dc),
            row: self.row.saturating_add(dr),
        }
    }

    /// Return the pixel coordinates of the cell's top-left corner on a board
    /// with the given cell size
    pub fn origin(self, cell_size: u32) -> (i64, i64) {
        let size = i64::from(cell_size);
        (i64::from(self.col) * size, i64::from(self.row) * size)
    }

    /// Euclidean distance between the centres of two cells, in cells
    pub fn distance(self, other: Cell) -> f64 {
        let dc = f64::from(other.col) - f64::from(self.col);
        let dr = f64::from(other.row) - f64::from(self.row);
        dc.hypot(dr)
    }
}

/// Board dimensions as supplied by configuration, in pixels
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BoardConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
}

impl Default for BoardConfig {
    fn default() -> BoardConfig {
        BoardConfig {
            width: consts::DEFAULT_BOARD_WIDTH,
            height: consts::DEFAULT_BOARD_HEIGHT,
            cell_size: consts::DEFAULT_CELL_SIZE,
        }
    }
}

/// Immutable grid geometry for a single game
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Board {
    /// Width in cells
    width: i32,
    /// Height in cells
    height: i32,
    /// Edge length of a cell in pixels
    cell_size: u32,
}

impl Board {
    /// Derive a board from pixel dimensions.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the cell size is zero, if the dimensions do not fit at
    /// least two whole cells, or if they are too large to address.
    pub fn new(config: &BoardConfig) -> Result<Board, BoardError> {
        let BoardConfig {
            width,
            height,
            cell_size,
        } = *config;
        if cell_size == 0 {
            return Err(BoardError::ZeroCellSize);
        }
        let (Ok(w), Ok(h)) = (
            i32::try_from(width / cell_size),
            i32::try_from(height / cell_size),
        ) else {
            return Err(BoardError::TooLarge { width, height });
        };
        if w == 0 || h == 0 || w.saturating_mul(h) < 2 {
            return Err(BoardError::TooSmall {
                width,
                height,
                cell_size,
            });
        }
        Ok(Board {
            width: w,
            height: h,
            cell_size,
        })
    }

    /// Width in cells
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Total number of cells on the board
    pub fn area(&self) -> usize {
        let w = usize::try_from(self.width).unwrap_or_default();
        let h = usize::try_from(self.height).unwrap_or_default();
        w * h
    }

    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.col) && (0..self.height).contains(&cell.row)
    }

    /// The cell in which a new snake starts
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Iterate over every cell on the board in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let Board { width, height, .. } = *self;
        (0..height).flat_map(move |row| (0..width).map(move |col| Cell::new(col, row)))
    }

    /// Return a uniformly random cell on the board
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(
            rng.random_range(0..self.width),
            rng.random_range(0..self.height),
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum BoardError {
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("a {width}x{height} board with {cell_size}-pixel cells holds fewer than two cells")]
    TooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error("a {width}x{height} board is too large")]
    TooLarge { width: u32, height: u32 },
}
