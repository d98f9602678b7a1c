use jump61_ai::perft;
use jump61_core::Board;

fn main() {
    let size = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(3);
    let max_depth = std::env::args()
        .nth(2)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(5);

    let now = std::time::Instant::now();
    for depth in 0..=max_depth {
        let mut board = Board::new(size);
        let res = perft(&mut board, depth);
        println!("Depth {}: {}", depth, res);
    }
    let elapsed = now.elapsed();
    println!("Total time: {:.2?}", elapsed);
}
