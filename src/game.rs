use std::io::Write;

use jump61_core::{Board, GameRecord, Side};
use log::{info, warn};

use crate::error::DriverResult;
use crate::player::{Command, Player};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub winner: Option<Side>,
    pub record: GameRecord,
}

/// Owns the board of record and alternates between the two players until
/// one side owns every square or a player quits.
pub struct Game<W> {
    board: Board,
    record: GameRecord,
    red: Box<dyn Player>,
    blue: Box<dyn Player>,
    out: W,
}

impl<W: Write> Game<W> {
    pub fn new(size: usize, red: Box<dyn Player>, blue: Box<dyn Player>, out: W) -> Self {
        debug_assert_eq!(red.side(), Side::Red);
        debug_assert_eq!(blue.side(), Side::Blue);
        Game {
            board: Board::new(size),
            record: GameRecord::new(size),
            red,
            blue,
            out,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    fn player(&self, side: Side) -> &dyn Player {
        match side {
            Side::Blue => self.blue.as_ref(),
            _ => self.red.as_ref(),
        }
    }

    pub fn play(&mut self) -> DriverResult<Outcome> {
        info!(
            "Starting a {0}x{0} game: {1} (Red) vs {2} (Blue)",
            self.board.size(),
            self.red.name(),
            self.blue.name()
        );
        writeln!(self.out, "{}", self.board)?;

        while self.board.get_winner().is_none() {
            let side = self.board.whose_move();
            let board = &self.board;
            let command = match side {
                Side::Blue => self.blue.get_command(board)?,
                _ => self.red.get_command(board)?,
            };
            match command {
                Command::Move(coord) => {
                    if let Err(err) = self.board.try_add_spot_at(side, coord) {
                        if self.player(side).is_automated() {
                            warn!("{:?} produced an illegal move: {}", side, err);
                        }
                        writeln!(self.out, "Illegal move: {}", err)?;
                        continue;
                    }
                    if let Some(index) = self.board.index_of(coord) {
                        self.record.push(side, index);
                    }
                    writeln!(
                        self.out,
                        "{} moves {} {}.",
                        side.name(),
                        coord.row,
                        coord.col
                    )?;
                    writeln!(self.out, "{}", self.board)?;
                }
                Command::Undo => self.undo_turn()?,
                Command::Quit => {
                    info!("{:?} quit the game", side);
                    return Ok(Outcome {
                        winner: None,
                        record: self.record.clone(),
                    });
                }
            }
        }

        let winner = self.board.get_winner();
        self.record.set_winner(winner);
        if let Some(side) = winner {
            info!("{:?} wins after {} moves", side, self.record.moves().len());
            writeln!(self.out, "{} wins.", side.name())?;
        }
        Ok(Outcome {
            winner,
            record: self.record.clone(),
        })
    }

    /// Takes back the opponent's last move and the mover's own move before
    /// it, so the same side is to move again.
    fn undo_turn(&mut self) -> DriverResult<()> {
        if self.board.history_len() < 2 {
            writeln!(self.out, "Nothing to undo.")?;
            return Ok(());
        }
        for _ in 0..2 {
            self.board.undo();
            self.record.pop();
        }
        writeln!(self.out, "{}", self.board)?;
        Ok(())
    }
}
