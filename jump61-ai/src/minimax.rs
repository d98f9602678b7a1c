use jump61_core::{Board, Coord, Side};
use log::{debug, trace};

use crate::{gen_moves, MoveSelector, SearchError};

/// Value of a position won by Red.
pub const WINNING_VALUE: i32 = i32::MAX;
/// Value of a position won by Blue.
pub const LOSING_VALUE: i32 = i32::MIN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchSettings {
    /// Number of plies searched below the root.
    pub depth: usize,
}

impl SearchSettings {
    pub fn new(depth: usize) -> Self {
        SearchSettings { depth }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings { depth: 4 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Square number of the chosen move.
    pub best_move: usize,
    /// Minimax value of the root, from Red's point of view.
    pub value: i32,
    /// Number of positions visited.
    pub nodes: u64,
}

/// Depth-bounded minimax with alpha-beta pruning over a private copy of
/// the board. Moves are tried in increasing square order.
#[derive(Debug, Clone)]
pub struct Searcher {
    settings: SearchSettings,
    seed: u64,
    found_move: Option<usize>,
    nodes: u64,
}

impl Searcher {
    pub fn new(settings: SearchSettings, seed: u64) -> Self {
        Searcher {
            settings,
            seed,
            found_move: None,
            nodes: 0,
        }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Searches for a move for `side`, which must be the side to move on a
    /// board that is not yet won.
    pub fn search(&mut self, board: &Board, side: Side) -> Result<SearchResult, SearchError> {
        if self.settings.depth == 0 {
            return Err(SearchError::InvalidDepth);
        }
        if let Some(winner) = board.get_winner() {
            return Err(SearchError::GameOver(winner));
        }
        if side == Side::White || board.whose_move() != side {
            return Err(SearchError::NotYourTurn(side));
        }

        let mut work = board.clone();
        self.found_move = None;
        self.nodes = 0;
        let sense = if side == Side::Red { 1 } else { -1 };
        let value = self.min_max(
            &mut work,
            self.settings.depth,
            true,
            sense,
            LOSING_VALUE,
            WINNING_VALUE,
        );
        debug_assert_eq!(work, *board);

        // A side to move on an open board always has a playable square.
        let best_move = self.found_move.ok_or(SearchError::NotYourTurn(side))?;
        debug!(
            "{:?} (seed {}): move {}, value {}, {} nodes at depth {}",
            side,
            self.seed,
            board.move_string(best_move),
            value,
            self.nodes,
            self.settings.depth
        );
        Ok(SearchResult {
            best_move,
            value,
            nodes: self.nodes,
        })
    }

    /// Returns the value of `board` searched `depth` plies deep, recording
    /// the move tried last at this node in `found_move` iff `save_move`.
    /// `sense` is 1 when Red (the maximizer) moves and -1 for Blue.
    ///
    /// The recorded move is the candidate being examined when the loop
    /// ended, either through a cutoff or by running out of moves, not the
    /// candidate that produced the best value.
    fn min_max(
        &mut self,
        board: &mut Board,
        depth: usize,
        save_move: bool,
        sense: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 || board.get_winner().is_some() {
            return static_eval(board);
        }

        let (side, mut value) = if sense == 1 {
            (Side::Red, LOSING_VALUE)
        } else {
            (Side::Blue, WINNING_VALUE)
        };
        let mut last_move = None;

        for index in gen_moves(board, side) {
            board.add_spot_unchecked(side, index);
            let child_value = self.min_max(board, depth - 1, false, -sense, alpha, beta);
            board.undo();

            if sense == 1 {
                value = value.max(child_value);
                alpha = alpha.max(value);
            } else {
                value = value.min(child_value);
                beta = beta.min(value);
            }
            last_move = Some(index);
            if save_move {
                trace!(
                    "candidate {}: value {}, window [{}, {}]",
                    board.move_string(index),
                    child_value,
                    alpha,
                    beta
                );
            }
            if beta <= alpha {
                break;
            }
        }

        if save_move {
            self.found_move = last_move;
        }
        value
    }
}

impl MoveSelector for Searcher {
    fn select(&mut self, board: &Board, side: Side) -> Result<Coord, SearchError> {
        let result = self.search(board, side)?;
        Ok(board.coord(result.best_move))
    }
}

/// Static value of `board`: the number of Red squares minus the number of
/// Blue squares, or a sentinel once a side has won.
pub fn static_eval(board: &Board) -> i32 {
    match board.get_winner() {
        Some(Side::Red) => WINNING_VALUE,
        Some(Side::Blue) => LOSING_VALUE,
        _ => board.num_of_side(Side::Red) as i32 - board.num_of_side(Side::Blue) as i32,
    }
}

/// Chooses a move for `side` with a default-depth search and returns its
/// coordinate.
/// The search is deterministic; `seed` only identifies the search in logs.
pub fn try_select_move(board: &Board, side: Side, seed: u64) -> Result<Coord, SearchError> {
    Searcher::new(SearchSettings::default(), seed).select(board, side)
}

/// Chooses a move for `side` and returns its coordinate.
/// Panics if the game is over or it is not `side`'s turn.
pub fn select_move(board: &Board, side: Side, seed: u64) -> Coord {
    match try_select_move(board, side, seed) {
        Ok(coord) => coord,
        Err(err) => panic!("cannot select a move for {:?}: {}", side, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain minimax without pruning.
    fn minimax_value(board: &mut Board, depth: usize) -> i32 {
        if depth == 0 || board.get_winner().is_some() {
            return static_eval(board);
        }
        let side = board.whose_move();
        let values: Vec<i32> = gen_moves(board, side)
            .into_iter()
            .map(|index| {
                board.add_spot(side, index);
                let value = minimax_value(board, depth - 1);
                board.undo();
                value
            })
            .collect();
        if side == Side::Red {
            values.into_iter().max().unwrap()
        } else {
            values.into_iter().min().unwrap()
        }
    }

    fn play(size: usize, moves: &[usize]) -> Board {
        let mut board = Board::new(size);
        for &index in moves {
            let side = board.whose_move();
            board.add_spot(side, index);
        }
        board
    }

    #[test]
    fn test_static_eval() {
        let board =
            Board::try_from_dump("===\n    1r 1r 0- \n    0- 2b 0- \n    0- 0- 1r \n===").unwrap();
        assert_eq!(static_eval(&board), 2);
        let board = Board::try_from_dump("===\n    1b 1b \n    2b 1b \n===").unwrap();
        assert_eq!(static_eval(&board), LOSING_VALUE);
        let board = Board::try_from_dump("===\n    1r 1r \n    2r 1r \n===").unwrap();
        assert_eq!(static_eval(&board), WINNING_VALUE);
    }

    #[test]
    fn test_finds_immediate_win() {
        let board = Board::try_from_dump("===\n    1r 1b \n    2b 2r \n===").unwrap();
        assert_eq!(board.whose_move(), Side::Red);
        let mut searcher = Searcher::new(SearchSettings::default(), 0);
        let result = searcher.search(&board, Side::Red).unwrap();
        assert_eq!(result.best_move, 3);
        assert_eq!(result.value, WINNING_VALUE);
        assert_eq!(select_move(&board, Side::Red, 0), Coord::new(2, 2));

        let mut after = board.clone();
        after.add_spot(Side::Red, result.best_move);
        assert_eq!(after.get_winner(), Some(Side::Red));
    }

    #[test]
    fn test_value_matches_plain_minimax() {
        let positions = [
            play(2, &[]),
            play(2, &[0, 3]),
            play(3, &[]),
            play(3, &[8, 0, 8, 0]),
            play(3, &[4, 0, 4, 8, 2]),
        ];
        for board in positions {
            for depth in 1..=4 {
                let side = board.whose_move();
                let mut searcher = Searcher::new(SearchSettings::new(depth), 7);
                let result = searcher.search(&board, side).unwrap();
                let mut work = board.clone();
                assert_eq!(
                    result.value,
                    minimax_value(&mut work, depth),
                    "depth {} on\n{}",
                    depth,
                    board
                );
                assert!(board.is_legal(side, result.best_move));
            }
        }
    }

    #[test]
    fn test_keeps_last_examined_move() {
        // Without a forced win the root never cuts off, so the last
        // legal square is the one kept.
        let board = Board::new(3);
        let mut searcher = Searcher::new(SearchSettings::default(), 0);
        let result = searcher.search(&board, Side::Blue).unwrap();
        assert_eq!(result.best_move, 8);
    }

    #[test]
    fn test_cutoff_at_first_forced_win() {
        let board = Board::try_from_dump("===\n    2b 2r \n    2r 2r \n===").unwrap();
        assert_eq!(board.whose_move(), Side::Red);
        let result = Searcher::new(SearchSettings::default(), 0)
            .search(&board, Side::Red)
            .unwrap();
        assert_eq!(result.best_move, 1);
        assert_eq!(result.value, WINNING_VALUE);
    }

    #[test]
    fn test_search_does_not_touch_board() {
        let board = play(3, &[8, 0, 8, 0, 8]);
        let before = board.clone();
        let _ = select_move(&board, board.whose_move(), 3);
        assert_eq!(board, before);
    }

    #[test]
    fn test_search_errors() {
        let mut searcher = Searcher::new(SearchSettings::default(), 0);
        let board = Board::new(3);
        assert_eq!(
            searcher.search(&board, Side::Red),
            Err(SearchError::NotYourTurn(Side::Red))
        );
        let won = Board::try_from_dump("===\n    1r 1r \n    2r 1r \n===").unwrap();
        assert_eq!(
            searcher.search(&won, Side::Blue),
            Err(SearchError::GameOver(Side::Red))
        );
        let mut shallow = Searcher::new(SearchSettings::new(0), 0);
        assert_eq!(
            shallow.search(&board, Side::Blue),
            Err(SearchError::InvalidDepth)
        );
    }

    #[test]
    #[should_panic]
    fn test_select_move_panics_when_not_your_turn() {
        select_move(&Board::new(4), Side::Blue, 0);
    }
}
