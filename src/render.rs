//! Text rendering of boards.

use std::fmt;

use crate::board::{Board, Color};
use crate::constants::{BLACK_GLYPH, EMPTY_GLYPH, WHITE_GLYPH};

impl Color {
    pub fn glyph(self) -> char {
        match self {
            Color::Black => BLACK_GLYPH,
            Color::White => WHITE_GLYPH,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

fn glyph(cell: Option<Color>) -> char {
    cell.map_or(EMPTY_GLYPH, Color::glyph)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (col, &cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", glyph(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A board printed with column numbers on top and row numbers on the left.
pub struct WithIndices<'a>(&'a Board);

impl Board {
    pub fn with_indices(&self) -> WithIndices<'_> {
        WithIndices(self)
    }
}

impl fmt::Display for WithIndices<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let w = board.size().to_string().len();

        write!(f, "{:w$}", "", w = w + 1)?;
        for col in 0..board.size() {
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{col:>w$}")?;
        }
        writeln!(f)?;

        for (i, row) in board.rows().enumerate() {
            write!(f, "{i:>w$}")?;
            for &cell in row {
                write!(f, "{:w$}{}", "", glyph(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_board() {
        let mut board = Board::new(3).unwrap();
        board.occupy(0, 0, Color::Black).unwrap();
        board.occupy(1, 2, Color::White).unwrap();
        assert_eq!(board.to_string(), "X . .\n. . O\n. . .\n");
    }

    #[test]
    fn test_board_with_indices() {
        let mut board = Board::new(3).unwrap();
        board.occupy(2, 1, Color::Black).unwrap();
        assert_eq!(
            board.with_indices().to_string(),
            "  0 1 2\n0 . . .\n1 . . .\n2 . X .\n"
        );
    }

    #[test]
    fn test_indices_align_for_two_digit_sizes() {
        let board = Board::new(10).unwrap();
        let text = board.with_indices().to_string();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("    0  1"));
        assert!(header.ends_with(" 9"));
        let last = lines.last().unwrap();
        assert!(last.starts_with(" 9  ."));
        // Column 9 header digit sits above the last cell
        assert_eq!(header.len(), last.len());
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::Black.to_string(), "X");
        assert_eq!(Color::White.to_string(), "O");
    }
}
