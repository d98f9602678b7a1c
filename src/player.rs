use std::io::{BufRead, Write};

use jump61_ai::{MoveSelector, RandomMover, SearchSettings, Searcher};
use jump61_core::{Board, Coord, Side};

use crate::error::DriverResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Coord),
    Undo,
    Quit,
}

impl Command {
    pub fn try_from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "undo" => Some(Command::Undo),
            "quit" => Some(Command::Quit),
            other => Coord::try_from_move_str(other).map(Command::Move),
        }
    }
}

/// Something that decides the moves of one side.
pub trait Player {
    fn side(&self) -> Side;

    fn name(&self) -> &str;

    /// Returns the next command for the position on `board`, where it is
    /// this player's turn.
    fn get_command(&mut self, board: &Board) -> DriverResult<Command>;

    /// True for players whose moves are chosen automatically.
    fn is_automated(&self) -> bool {
        true
    }
}

/// A player whose moves come from a [`MoveSelector`].
pub struct AutoPlayer {
    side: Side,
    name: &'static str,
    selector: Box<dyn MoveSelector>,
}

impl AutoPlayer {
    pub fn new(side: Side, name: &'static str, selector: Box<dyn MoveSelector>) -> Self {
        AutoPlayer {
            side,
            name,
            selector,
        }
    }

    pub fn ai(side: Side, settings: SearchSettings, seed: u64) -> Self {
        AutoPlayer::new(side, "AI", Box::new(Searcher::new(settings, seed)))
    }

    pub fn random(side: Side, seed: u64) -> Self {
        AutoPlayer::new(side, "Random", Box::new(RandomMover::new(seed)))
    }
}

impl Player for AutoPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        self.name
    }

    fn get_command(&mut self, board: &Board) -> DriverResult<Command> {
        Ok(Command::Move(self.selector.select(board, self.side)?))
    }
}

/// Reads commands line by line: `<row> <col>`, `undo` or `quit`.
/// The end of input counts as `quit`.
pub struct HumanPlayer<R, W> {
    side: Side,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(side: Side, input: R, output: W) -> Self {
        HumanPlayer {
            side,
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        "Human"
    }

    fn get_command(&mut self, _board: &Board) -> DriverResult<Command> {
        loop {
            write!(self.output, "{}> ", self.side.name())?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Command::Quit);
            }
            if line.trim().is_empty() {
                continue;
            }
            match Command::try_from_str(&line) {
                Some(command) => return Ok(command),
                None => writeln!(self.output, "Invalid command: {}", line.trim())?,
            }
        }
    }

    fn is_automated(&self) -> bool {
        false
    }
}
