use crate::{Board, InvalidSpotError, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordedMove {
    pub side: Side,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("move {ply} is illegal: {source}")]
    IllegalMove {
        ply: usize,
        source: InvalidSpotError,
    },
    #[error("recorded winner {recorded:?} does not match replayed winner {replayed:?}")]
    WinnerMismatch {
        recorded: Option<Side>,
        replayed: Option<Side>,
    },
}

/// The moves of a single game, kept in memory so the game can be replayed
/// or listed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameRecord {
    size: usize,
    moves: Vec<RecordedMove>,
    winner: Option<Side>,
}

impl GameRecord {
    pub fn new(size: usize) -> Self {
        GameRecord {
            size,
            moves: Vec::new(),
            winner: None,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn moves(&self) -> &[RecordedMove] {
        &self.moves
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn push(&mut self, side: Side, index: usize) {
        self.moves.push(RecordedMove { side, index });
    }

    /// Removes the last move, mirroring an undo on the game board.
    pub fn pop(&mut self) -> Option<RecordedMove> {
        self.winner = None;
        self.moves.pop()
    }

    pub fn set_winner(&mut self, winner: Option<Side>) {
        self.winner = winner;
    }

    /// Replays the recorded moves on a fresh board.
    pub fn to_board(&self) -> Result<Board, RecordError> {
        let mut board = Board::new(self.size);
        for (ply, mv) in self.moves.iter().enumerate() {
            board
                .try_add_spot(mv.side, mv.index)
                .map_err(|source| RecordError::IllegalMove { ply, source })?;
        }
        let replayed = board.get_winner();
        if self.winner.is_some() && self.winner != replayed {
            return Err(RecordError::WinnerMismatch {
                recorded: self.winner,
                replayed,
            });
        }
        Ok(board)
    }

    /// Returns the moves in `"<row> <col>"` notation, one per line, each
    /// prefixed by the side that made it.
    pub fn to_move_list(&self) -> String {
        let board = Board::new(self.size);
        self.moves
            .iter()
            .map(|mv| format!("{}: {}", mv.side.name(), board.move_string(mv.index)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
