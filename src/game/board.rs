//! Tic-tac-toe board
//!
//! Cells are addressed 0-8 in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```
//!
//! A cell leaves `Empty` at most once. [`Board::place`] refuses to overwrite,
//! so a board only ever moves forward.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of cells on the board
pub const CELLS: usize = 9;

/// Side length of the board
pub const SIDE: usize = 3;

/// Player mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Character used when rendering
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Character used when rendering (`-` for empty)
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Occupied(mark) => mark.symbol(),
        }
    }
}

/// Rejected board mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell {0} is outside the board (0-8)")]
    OutOfBounds(usize),

    #[error("cell {cell} is already taken by {mark}")]
    Occupied { cell: usize, mark: Mark },
}

/// 3x3 grid of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell at `index`, or `None` when out of bounds
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.get(index).is_some_and(Cell::is_empty)
    }

    /// Indices of every empty cell, ascending
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.cells[i].is_empty()).collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of cells holding `mark`
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Write `mark` into an empty cell
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] for `index >= 9`, [`BoardError::Occupied`]
    /// when the cell already holds a mark. The board is unchanged on error.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::OutOfBounds(index))?;

        if let Cell::Occupied(existing) = *cell {
            return Err(BoardError::Occupied {
                cell: index,
                mark: existing,
            });
        }

        *cell = Cell::Occupied(mark);
        Ok(())
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(SIDE)
    }
}

impl fmt::Display for Board {
    /// Hyphen-ruled grid, one `| c | c | c | ` line per row
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "-------------";

        write!(f, "{}", RULE)?;
        for row in self.rows() {
            write!(f, "\n| ")?;
            for cell in row {
                write!(f, "{} | ", cell.symbol())?;
            }
            write!(f, "\n{}", RULE)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.count(Mark::X), 0);
        assert_eq!(board.count(Mark::O), 0);
    }

    #[test]
    fn test_place_marks() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        board.place(0, Mark::O).unwrap();

        assert_eq!(board.get(4), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.get(0), Some(Cell::Occupied(Mark::O)));
        assert!(!board.is_empty_cell(4));
        assert_eq!(board.empty_cells(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_place_never_overwrites() {
        let mut board = Board::new();
        board.place(2, Mark::X).unwrap();

        let err = board.place(2, Mark::O).unwrap_err();
        assert_eq!(err, BoardError::Occupied { cell: 2, mark: Mark::X });
        assert_eq!(board.get(2), Some(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Mark::X), Err(BoardError::OutOfBounds(9)));
        assert_eq!(board, Board::new());
        assert_eq!(board.get(9), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for i in 0..CELLS {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.place(i, mark).unwrap();
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
        assert_eq!(board.count(Mark::X), 5);
        assert_eq!(board.count(Mark::O), 4);
    }

    #[test]
    fn test_render_empty_board() {
        let expected = "-------------\n\
                        | - | - | - | \n\
                        -------------\n\
                        | - | - | - | \n\
                        -------------\n\
                        | - | - | - | \n\
                        -------------";
        assert_eq!(Board::new().to_string(), expected);
    }

    #[test]
    fn test_render_marks() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();
        board.place(8, Mark::X).unwrap();

        let lines: Vec<String> = board.to_string().lines().map(str::to_owned).collect();
        assert_eq!(lines[1], "| X | - | - | ");
        assert_eq!(lines[3], "| - | O | - | ");
        assert_eq!(lines[5], "| - | - | X | ");
    }

    #[test]
    fn test_mark_helpers() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Cell::Occupied(Mark::O).symbol(), 'O');
        assert_eq!(Cell::Empty.mark(), None);
    }
}
