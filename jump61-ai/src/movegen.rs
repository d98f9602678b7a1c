use jump61_core::{Board, Side};

/// Returns every square number `side` may currently add a spot to, in
/// increasing order.
pub fn gen_moves(board: &Board, side: Side) -> Vec<usize> {
    if board.get_winner().is_some() || !board.is_legal_side(side) {
        return Vec::new();
    }
    board
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, square)| side.playable_square(square.side()))
        .map(|(index, _)| index)
        .collect()
}

/// Counts the move sequences of length `depth` from the current position.
/// A won position counts as a single leaf.
pub fn perft(board: &mut Board, depth: usize) -> u64 {
    if depth == 0 || board.get_winner().is_some() {
        return 1;
    }

    let side = board.whose_move();
    let mut count = 0;
    for index in gen_moves(board, side) {
        board.add_spot_unchecked(side, index);
        count += perft(board, depth - 1);
        board.undo();
    }

    count
}
