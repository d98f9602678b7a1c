mod minimax;
mod movegen;
mod random;

pub use minimax::*;
pub use movegen::*;
pub use random::*;

use jump61_core::{Board, Coord, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("the game is already won by {0:?}")]
    GameOver(Side),
    #[error("it is not {0:?}'s turn")]
    NotYourTurn(Side),
    #[error("search depth must be at least 1")]
    InvalidDepth,
}

/// Chooses moves for the side to move.
pub trait MoveSelector {
    /// Returns the square `side` should play on `board`.
    fn select(&mut self, board: &Board, side: Side) -> Result<Coord, SearchError>;
}
