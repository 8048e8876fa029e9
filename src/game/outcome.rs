//! Win and draw detection

use super::board::{Board, Cell, Mark};
use std::fmt;

/// Every line that wins: three rows, three columns, two diagonals
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// State of a game as seen by the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// No line and at least one empty cell
    Undecided,
    XWins,
    OWins,
    /// Board full without a line
    Draw,
}

impl Outcome {
    /// Whether the game is over
    pub fn is_terminal(self) -> bool {
        self != Outcome::Undecided
    }

    fn for_winner(mark: Mark) -> Self {
        match mark {
            Mark::X => Outcome::XWins,
            Mark::O => Outcome::OWins,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::Undecided => "undecided",
            Outcome::XWins => "X wins",
            Outcome::OWins => "O wins",
            Outcome::Draw => "draw",
        };
        f.write_str(text)
    }
}

/// Classify `board`
///
/// A completed line wins even when the board is also full. Pure; the
/// coordinator calls it only while it holds the turn token.
pub fn check_outcome(board: &Board) -> Outcome {
    for [a, b, c] in LINES {
        let first = board.get(a);
        if let Some(Cell::Occupied(mark)) = first {
            if first == board.get(b) && first == board.get(c) {
                return Outcome::for_winner(mark);
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(layout: &str) -> Board {
        let mut board = Board::new();
        for (i, c) in layout.chars().filter(|c| !c.is_whitespace()).enumerate() {
            match c {
                'X' => board.place(i, Mark::X).unwrap(),
                'O' => board.place(i, Mark::O).unwrap(),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_undecided() {
        assert_eq!(check_outcome(&Board::new()), Outcome::Undecided);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut board = Board::new();
            for cell in line {
                board.place(cell, Mark::O).unwrap();
            }
            assert_eq!(check_outcome(&board), Outcome::OWins, "line {:?}", line);
        }
    }

    #[test]
    fn test_row_win() {
        let board = board_from("XXX OO- ---");
        assert_eq!(check_outcome(&board), Outcome::XWins);
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_from("XXO XO- O--");
        assert_eq!(check_outcome(&board), Outcome::OWins);
    }

    #[test]
    fn test_draw() {
        let board = board_from("XOX XOO OXX");
        assert_eq!(check_outcome(&board), Outcome::Draw);
        assert!(Outcome::Draw.is_terminal());
        assert!(!Outcome::Undecided.is_terminal());
    }

    #[test]
    fn test_win_beats_full_board() {
        // Full board whose last move completed a column
        let board = board_from("XOX XOO XXO");
        assert!(board.is_full());
        assert_eq!(check_outcome(&board), Outcome::XWins);
    }

    #[test]
    fn test_incomplete_line() {
        let board = board_from("XX- OO- ---");
        assert_eq!(check_outcome(&board), Outcome::Undecided);
        assert!(!Outcome::Undecided.is_terminal());
    }
}
