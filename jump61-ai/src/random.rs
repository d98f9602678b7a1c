use jump61_core::{Board, Coord, Side};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{gen_moves, MoveSelector, SearchError};

/// Picks uniformly among the legal moves, reproducibly for a given seed.
pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    pub fn new(seed: u64) -> Self {
        RandomMover {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn select_move(&mut self, board: &Board, side: Side) -> Result<Coord, SearchError> {
        if let Some(winner) = board.get_winner() {
            return Err(SearchError::GameOver(winner));
        }
        let moves = gen_moves(board, side);
        if moves.is_empty() {
            return Err(SearchError::NotYourTurn(side));
        }
        let index = moves[self.rng.gen_range(0..moves.len())];
        debug!("{:?} picked {} at random", side, board.move_string(index));
        Ok(board.coord(index))
    }
}

impl MoveSelector for RandomMover {
    fn select(&mut self, board: &Board, side: Side) -> Result<Coord, SearchError> {
        self.select_move(board, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_mover_selects_legal_move() {
        let mut mover = RandomMover::new(42);
        let board =
            Board::try_from_dump("===\n    1r 1b 0- \n    0- 1b 0- \n    0- 0- 1r \n===").unwrap();
        for _ in 0..100 {
            let coord = mover.select_move(&board, Side::Blue).unwrap();
            assert!(board.is_legal_at(Side::Blue, coord));
        }
    }

    #[test]
    fn test_random_mover_is_reproducible() {
        let board = Board::new(5);
        let mut a = RandomMover::new(7);
        let mut b = RandomMover::new(7);
        for _ in 0..20 {
            assert_eq!(
                a.select_move(&board, Side::Blue).unwrap(),
                b.select_move(&board, Side::Blue).unwrap()
            );
        }
    }

    #[test]
    fn test_random_mover_plays_full_game() {
        let mut red = RandomMover::new(1);
        let mut blue = RandomMover::new(2);
        let mut board = Board::new(3);
        let mut plies = 0;
        while board.get_winner().is_none() && plies < 10_000 {
            let side = board.whose_move();
            let mover = if side == Side::Red { &mut red } else { &mut blue };
            let coord = mover.select_move(&board, side).unwrap();
            board.add_spot_at(side, coord);
            plies += 1;
        }
        assert!(board.get_winner().is_some());
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_selectors_agree_on_forced_move() {
        // Blue owns three squares and Red one, so only one square is open
        // to Red.
        let board = Board::try_from_dump("===\n    1r 1b \n    1b 1b \n===").unwrap();
        assert_eq!(board.whose_move(), Side::Red);
        let mut selectors: Vec<Box<dyn MoveSelector>> = vec![
            Box::new(RandomMover::new(5)),
            Box::new(crate::Searcher::new(crate::SearchSettings::new(2), 5)),
        ];
        for selector in selectors.iter_mut() {
            assert_eq!(selector.select(&board, Side::Red).unwrap(), Coord::new(1, 1));
        }
    }

    #[test]
    fn test_random_mover_errors() {
        let mut mover = RandomMover::new(0);
        assert_eq!(
            mover.select_move(&Board::new(4), Side::Blue),
            Err(SearchError::NotYourTurn(Side::Blue))
        );
    }
}
