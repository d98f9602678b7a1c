use std::fmt;

use crate::{Board, Coord, Side, Square};

const DUMP_DELIMITER: &str = "===";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DumpParseError {
    #[error("dump must start and end with a `===` line")]
    MissingDelimiter,
    #[error("dump contains no rows")]
    Empty,
    #[error("row {row} has {found} squares, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid square `{0}`")]
    InvalidSquare(String),
}

fn square_to_str(square: Square) -> String {
    format!("{}{}", square.spots(), square.side().symbol())
}

fn square_from_str(s: &str) -> Option<Square> {
    let side = Side::from_symbol(s.chars().last()?)?;
    let spots = s[..s.len() - 1].parse::<u32>().ok()?;
    if (spots == 0) != (side == Side::White) {
        return None;
    }
    Some(Square::new(side, spots))
}

impl Board {
    /// Returns the dumped representation of this board: a `===` line, one
    /// line per row with every square written as `<spots><r|b|-> `, and a
    /// closing `===` line.
    pub fn to_dump(&self) -> String {
        let mut out = String::from(DUMP_DELIMITER);
        for (index, square) in self.squares().iter().enumerate() {
            if index % self.size() == 0 {
                out.push_str("\n    ");
            }
            out.push_str(&square_to_str(*square));
            out.push(' ');
        }
        out.push('\n');
        out.push_str(DUMP_DELIMITER);
        out
    }

    /// Parses the format produced by [`Board::to_dump`]. The resulting board
    /// has an empty undo history.
    pub fn try_from_dump(s: &str) -> Result<Board, DumpParseError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim).collect();
        if lines.len() < 2
            || lines.first() != Some(&DUMP_DELIMITER)
            || lines.last() != Some(&DUMP_DELIMITER)
        {
            return Err(DumpParseError::MissingDelimiter);
        }
        let rows = &lines[1..lines.len() - 1];
        let size = rows.len();
        if size == 0 {
            return Err(DumpParseError::Empty);
        }
        let mut board = Board::new(size);
        for (r, line) in rows.iter().enumerate() {
            let cells: Vec<&str> = line.split_whitespace().collect();
            if cells.len() != size {
                return Err(DumpParseError::RowLength {
                    row: r + 1,
                    expected: size,
                    found: cells.len(),
                });
            }
            for (c, cell) in cells.into_iter().enumerate() {
                let square = square_from_str(cell)
                    .ok_or_else(|| DumpParseError::InvalidSquare(cell.to_string()))?;
                board.set(
                    Coord::new(r as i32 + 1, c as i32 + 1),
                    square.spots(),
                    square.side(),
                );
            }
        }
        Ok(board)
    }

    /// Returns a human-readable rendition of this board with row numbers
    /// in front of every row and a footer of column numbers.
    pub fn to_display_string(&self) -> String {
        let mut out = String::new();
        for r in 0..self.size() {
            let row = &self.squares()[r * self.size()..(r + 1) * self.size()];
            let cells: Vec<String> = row.iter().map(|sq| square_to_str(*sq)).collect();
            out.push_str(&format!("{:2} {}\n", r + 1, cells.join(" ")));
        }
        out.push_str("  ");
        for c in 1..=self.size() {
            out.push_str(&format!("{:3}", c));
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}
