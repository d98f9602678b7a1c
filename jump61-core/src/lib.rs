mod board;
mod coord;
mod history;
mod notation;
mod square;

pub use board::*;
pub use coord::*;
pub use history::*;
pub use notation::*;
pub use square::*;

/// Owner of a square. `White` marks an unowned square.
///
/// The variant order is Red, Blue, White; the two players are each other's
/// opposite and White is its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Red,
    Blue,
    White,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
            Side::White => Side::White,
        }
    }

    /// True iff a square owned by `owner` may receive a spot from `self`,
    /// or, read the other way round, iff `self` to move lets `owner` play.
    pub fn playable_square(&self, owner: Side) -> bool {
        *self != owner.opposite()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Blue => "Blue",
            Side::White => "White",
        }
    }

    /// Single character used by the dump format.
    pub fn symbol(&self) -> char {
        match self {
            Side::Red => 'r',
            Side::Blue => 'b',
            Side::White => '-',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'r' => Some(Side::Red),
            'b' => Some(Side::Blue),
            '-' => Some(Side::White),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidSpotError {
    #[error("it is not {0:?}'s turn")]
    NotYourTurn(Side),
    #[error("square {0} does not exist")]
    InvalidPosition(usize),
    #[error("{0:?} is off the board")]
    OffBoard(Coord),
    #[error("square {0} belongs to the opponent")]
    OpponentSquare(usize),
    #[error("the game is already won by {0:?}")]
    GameOver(Side),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UndoError {
    #[error("no move left to undo")]
    NoHistory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Side::Red.opposite(), Side::Blue);
        assert_eq!(Side::Blue.opposite(), Side::Red);
        assert_eq!(Side::White.opposite(), Side::White);
    }

    #[test]
    fn test_playable_square() {
        assert!(Side::Red.playable_square(Side::White));
        assert!(Side::Red.playable_square(Side::Red));
        assert!(!Side::Red.playable_square(Side::Blue));
        assert!(Side::Blue.playable_square(Side::White));
        assert!(Side::Blue.playable_square(Side::Blue));
        assert!(!Side::Blue.playable_square(Side::Red));
    }

    #[test]
    fn test_symbols() {
        for side in [Side::Red, Side::Blue, Side::White] {
            assert_eq!(Side::from_symbol(side.symbol()), Some(side));
        }
        assert_eq!(Side::from_symbol('x'), None);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            InvalidSpotError::NotYourTurn(Side::Blue).to_string(),
            "it is not Blue's turn"
        );
        assert_eq!(UndoError::NoHistory.to_string(), "no move left to undo");
    }
}
