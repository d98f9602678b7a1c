/// A square position given as a 1-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }

    /// Coordinate of square number `index` in row-major order.
    pub fn from_index(index: usize, size: usize) -> Self {
        Coord {
            row: (index / size) as i32 + 1,
            col: (index % size) as i32 + 1,
        }
    }

    pub fn iter_board(size: usize) -> impl Iterator<Item = Coord> {
        (1..=size).flat_map(move |r| (1..=size).map(move |c| Coord::new(r as i32, c as i32)))
    }

    pub fn is_valid(&self, size: usize) -> bool {
        self.row >= 1 && self.col >= 1 && (self.row as usize) <= size && (self.col as usize) <= size
    }

    /// Square number of this coordinate, or `None` if it lies off the board.
    pub fn try_index(&self, size: usize) -> Option<usize> {
        if self.is_valid(size) {
            Some((self.col as usize - 1) + (self.row as usize - 1) * size)
        } else {
            None
        }
    }

    pub fn offset(&self, drow: i32, dcol: i32) -> Self {
        Coord {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    pub fn offset_dir(&self, dir: Dir) -> Self {
        match dir {
            Dir::Left => self.offset(0, -1),
            Dir::Right => self.offset(0, 1),
            Dir::Up => self.offset(-1, 0),
            Dir::Down => self.offset(1, 0),
        }
    }

    /// Parses `"<row> <col>"`, the format produced by [`crate::Board::move_string`].
    pub fn try_from_move_str(s: &str) -> Option<Self> {
        let mut parts = s.split_whitespace();
        let row = parts.next()?.parse::<i32>().ok()?;
        let col = parts.next()?.parse::<i32>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Coord::new(row, col))
    }
}

/// Orthogonal directions. [`Dir::ALL`] is the order in which an overfull
/// square feeds its neighbors and then recurses into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    Left,
    Right,
    Up,
    Down,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Up, Dir::Down];

    pub fn opposite(&self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        let size = 4;
        for (i, coord) in Coord::iter_board(size).enumerate() {
            assert_eq!(coord.try_index(size), Some(i));
            assert_eq!(Coord::from_index(i, size), coord);
        }
    }

    #[test]
    fn test_index_formula() {
        assert_eq!(Coord::new(1, 1).try_index(3), Some(0));
        assert_eq!(Coord::new(1, 3).try_index(3), Some(2));
        assert_eq!(Coord::new(2, 1).try_index(3), Some(3));
        assert_eq!(Coord::new(3, 3).try_index(3), Some(8));
    }

    #[test]
    fn test_invalid_coords() {
        for coord in [
            Coord::new(0, 1),
            Coord::new(1, 0),
            Coord::new(4, 1),
            Coord::new(1, 4),
            Coord::new(-1, -1),
        ] {
            assert!(!coord.is_valid(3));
            assert_eq!(coord.try_index(3), None);
        }
    }

    #[test]
    fn test_offset_dir() {
        let coord = Coord::new(2, 2);
        assert_eq!(coord.offset_dir(Dir::Left), Coord::new(2, 1));
        assert_eq!(coord.offset_dir(Dir::Right), Coord::new(2, 3));
        assert_eq!(coord.offset_dir(Dir::Up), Coord::new(1, 2));
        assert_eq!(coord.offset_dir(Dir::Down), Coord::new(3, 2));
        for dir in Dir::ALL {
            assert_eq!(coord.offset_dir(dir).offset_dir(dir.opposite()), coord);
        }
    }

    #[test]
    fn test_move_str() {
        assert_eq!(Coord::try_from_move_str("2 3"), Some(Coord::new(2, 3)));
        assert_eq!(Coord::try_from_move_str("  10   1 "), Some(Coord::new(10, 1)));
        assert_eq!(Coord::try_from_move_str("2"), None);
        assert_eq!(Coord::try_from_move_str("2 3 4"), None);
        assert_eq!(Coord::try_from_move_str("a 3"), None);
    }
}
