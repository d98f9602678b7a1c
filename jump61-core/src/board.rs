use crate::{Coord, Dir, InvalidSpotError, Side, Square, UndoError};

/// Represents a Jump61 board of `size` x `size` squares.
/// Squares are addressed either by a 1-based [`Coord`] or by their square
/// number in row-major order: row 1 holds squares `0..size`, row 2 holds
/// `size..2 * size`, and so on.
/// The side to move is never stored; it is derived from the total number of
/// spots on the board, so it stays correct across moves, undos and direct
/// edits alike.
/// Every call to [`Board::add_spot`] first records a snapshot, which
/// [`Board::undo`] restores.
#[derive(Debug)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
    history: Vec<Vec<Square>>,
}

impl Board {
    /// Creates an empty board with the given size.
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "board size must be at least 1");
        Board {
            size,
            squares: vec![Square::EMPTY; size * size],
            history: Vec::new(),
        }
    }

    /// Reinitializes this board to an empty `size` x `size` board and clears
    /// the undo history.
    pub fn clear(&mut self, size: usize) {
        *self = Board::new(size);
    }

    /// Overwrites the contents of this board with those of `other`.
    /// The undo history of this board is cleared.
    pub fn copy_from(&mut self, other: &Board) {
        self.size = other.size;
        self.squares.clone_from(&other.squares);
        self.history.clear();
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of squares on the board.
    pub fn num_squares(&self) -> usize {
        self.squares.len()
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Returns the contents of square number `index`.
    /// Panics if the square does not exist.
    pub fn get(&self, index: usize) -> Square {
        self.squares[index]
    }

    pub fn try_get(&self, coord: Coord) -> Option<Square> {
        coord
            .try_index(self.size)
            .map(|index| self.squares[index])
    }

    pub fn exists(&self, coord: Coord) -> bool {
        coord.is_valid(self.size)
    }

    pub fn exists_index(&self, index: usize) -> bool {
        index < self.squares.len()
    }

    pub fn row(&self, index: usize) -> i32 {
        Coord::from_index(index, self.size).row
    }

    pub fn col(&self, index: usize) -> i32 {
        Coord::from_index(index, self.size).col
    }

    pub fn coord(&self, index: usize) -> Coord {
        Coord::from_index(index, self.size)
    }

    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        coord.try_index(self.size)
    }

    /// Returns the move notation `"<row> <col>"` of square number `index`.
    pub fn move_string(&self, index: usize) -> String {
        format!("{} {}", self.row(index), self.col(index))
    }

    /// Total number of spots on the board.
    pub fn num_pieces(&self) -> usize {
        self.squares.iter().map(|sq| sq.spots() as usize).sum()
    }

    /// Number of squares owned by `side`.
    pub fn num_of_side(&self, side: Side) -> usize {
        self.squares.iter().filter(|sq| sq.side() == side).count()
    }

    /// The side that moves next. Once the game is won this is the loser.
    pub fn whose_move(&self) -> Side {
        if (self.num_pieces() + self.size) % 2 == 0 {
            Side::Red
        } else {
            Side::Blue
        }
    }

    /// Returns the side owning every square, if there is one.
    pub fn get_winner(&self) -> Option<Side> {
        let first = self.squares[0].side();
        if first != Side::White && self.squares.iter().all(|sq| sq.side() == first) {
            Some(first)
        } else {
            None
        }
    }

    /// True iff it is `player`'s turn.
    pub fn is_legal_side(&self, player: Side) -> bool {
        player != Side::White && self.whose_move().playable_square(player)
    }

    /// True iff `player` may currently add a spot to square number `index`.
    pub fn is_legal(&self, player: Side, index: usize) -> bool {
        self.can_add_spot(player, index).is_ok()
    }

    pub fn is_legal_at(&self, player: Side, coord: Coord) -> bool {
        self.index_of(coord)
            .is_some_and(|index| self.is_legal(player, index))
    }

    /// Checks if `player` may add a spot to square number `index`.
    pub fn can_add_spot(&self, player: Side, index: usize) -> Result<(), InvalidSpotError> {
        if let Some(winner) = self.get_winner() {
            return Err(InvalidSpotError::GameOver(winner));
        }
        if !self.is_legal_side(player) {
            return Err(InvalidSpotError::NotYourTurn(player));
        }
        match self.squares.get(index) {
            None => Err(InvalidSpotError::InvalidPosition(index)),
            Some(square) if !player.playable_square(square.side()) => {
                Err(InvalidSpotError::OpponentSquare(index))
            }
            Some(_) => Ok(()),
        }
    }

    /// Attempts to add a spot from `player` to square number `index`.
    /// If the move is illegal, the board state remains unchanged.
    pub fn try_add_spot(&mut self, player: Side, index: usize) -> Result<(), InvalidSpotError> {
        self.can_add_spot(player, index)?;
        self.add_spot_unchecked(player, index);
        Ok(())
    }

    pub fn try_add_spot_at(&mut self, player: Side, coord: Coord) -> Result<(), InvalidSpotError> {
        let index = self
            .index_of(coord)
            .ok_or(InvalidSpotError::OffBoard(coord))?;
        self.try_add_spot(player, index)
    }

    /// Adds a spot from `player` to square number `index`.
    /// Panics if the move is not legal.
    pub fn add_spot(&mut self, player: Side, index: usize) {
        if let Err(err) = self.can_add_spot(player, index) {
            panic!("illegal move by {:?} at square {}: {}", player, index, err);
        }
        self.add_spot_unchecked(player, index);
    }

    /// Adds a spot from `player` at the given coordinate.
    /// Panics if the move is not legal.
    pub fn add_spot_at(&mut self, player: Side, coord: Coord) {
        let index = self
            .index_of(coord)
            .unwrap_or_else(|| panic!("square {:?} does not exist", coord));
        self.add_spot(player, index);
    }

    /// Adds a spot without checking if the move is legal, then resolves any
    /// resulting overflow.
    /// Using this method with an illegal move leaves the board in a position
    /// no game could reach.
    pub fn add_spot_unchecked(&mut self, player: Side, index: usize) {
        self.mark_undo();
        self.simple_add(player, index, 1);
        self.jump(index);
    }

    /// Undoes the most recent [`Board::add_spot`].
    pub fn try_undo(&mut self) -> Result<(), UndoError> {
        let snapshot = self.history.pop().ok_or(UndoError::NoHistory)?;
        self.squares = snapshot;
        Ok(())
    }

    /// Undoes the most recent [`Board::add_spot`].
    /// Panics if there is nothing to undo.
    pub fn undo(&mut self) {
        if let Err(err) = self.try_undo() {
            panic!("cannot undo: {}", err);
        }
    }

    /// Number of moves that can currently be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Sets square `coord` to `spots` spots owned by `side`, or to an empty
    /// white square if `spots` is 0. Does not touch the undo history.
    pub fn set(&mut self, coord: Coord, spots: u32, side: Side) {
        let index = self
            .index_of(coord)
            .unwrap_or_else(|| panic!("square {:?} does not exist", coord));
        self.squares[index] = Square::new(side, spots);
    }

    /// Number of orthogonal neighbors of square number `index`.
    pub fn neighbors(&self, index: usize) -> usize {
        self.neighbor_indices(index).iter().flatten().count()
    }

    /// Neighbors of square number `index`, in [`Dir::ALL`] order.
    fn neighbor_indices(&self, index: usize) -> [Option<usize>; 4] {
        let coord = Coord::from_index(index, self.size);
        Dir::ALL.map(|dir| coord.offset_dir(dir).try_index(self.size))
    }

    fn mark_undo(&mut self) {
        self.history.push(self.squares.clone());
    }

    fn simple_add(&mut self, player: Side, index: usize, delta: i64) {
        self.squares[index] = self.squares[index].with_added(player, delta);
    }

    /// Resolves overflow starting at square `s`, assuming it is the only
    /// square that might be overfull.
    /// An overfull square hands one spot to each neighbor, claiming it for
    /// its own side, and the neighbors are then resolved depth-first.
    /// Nothing moves once one side owns the whole board.
    /// Recursion depth is not capped; it grows with the length of the cascade.
    fn jump(&mut self, s: usize) {
        if self.get_winner().is_some() {
            return;
        }
        let square = self.squares[s];
        let targets = self.neighbor_indices(s);
        let neighbor_count = targets.iter().flatten().count();
        if square.spots() as usize <= neighbor_count {
            return;
        }
        let side = square.side();
        for &target in targets.iter().flatten() {
            self.simple_add(side, target, 1);
            self.simple_add(side, s, -1);
        }
        for &target in targets.iter().flatten() {
            self.jump(target);
        }
    }

    /// Checks internal consistency of the board.
    pub fn validate(&self) -> Result<(), String> {
        if self.squares.len() != self.size * self.size {
            return Err(format!(
                "Square count mismatch: expected {}, got {}",
                self.size * self.size,
                self.squares.len()
            ));
        }
        for (index, square) in self.squares.iter().enumerate() {
            if square.is_empty() != (square.side() == Side::White) {
                return Err(format!(
                    "Square {} has {} spots but is owned by {:?}",
                    index,
                    square.spots(),
                    square.side()
                ));
            }
        }
        if let Some(pos) = self
            .history
            .iter()
            .position(|snapshot| snapshot.len() != self.squares.len())
        {
            return Err(format!("Undo snapshot {} has the wrong size", pos));
        }
        Ok(())
    }
}

impl Clone for Board {
    /// Copies the position only; the undo history of the copy starts empty.
    fn clone(&self) -> Self {
        Board {
            size: self.size,
            squares: self.squares.clone(),
            history: Vec::new(),
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.squares == other.squares
    }
}

impl Eq for Board {}
