use clap::{Parser, ValueEnum};
use jump61_ai::SearchSettings;
use jump61_core::Side;

use crate::error::{DriverError, DriverResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    /// Moves typed on standard input
    Human,
    /// Alpha-beta search
    Ai,
    /// Uniformly random legal moves
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "jump61", version, about = "Play Jump61 on the terminal")]
pub struct Args {
    /// Number of rows and columns
    #[arg(short = 's', long, default_value_t = 6)]
    pub size: usize,
    /// Who plays Red
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    pub red: PlayerKind,
    /// Who plays Blue
    #[arg(long, value_enum, default_value_t = PlayerKind::Ai)]
    pub blue: PlayerKind,
    /// Seed for the automated players
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Search depth in plies
    #[arg(short = 'd', long, default_value_t = 4)]
    pub depth: usize,
    /// Log search details
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub size: usize,
    pub red: PlayerKind,
    pub blue: PlayerKind,
    pub seed: u64,
    pub search: SearchSettings,
}

impl GameSettings {
    pub fn validate(&self) -> DriverResult<()> {
        if self.size < 1 {
            return Err(DriverError::InvalidSettings(
                "size must be at least 1".to_string(),
            ));
        }
        if self.search.depth < 1 {
            return Err(DriverError::InvalidSettings(
                "depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn player_kind(&self, side: Side) -> PlayerKind {
        match side {
            Side::Blue => self.blue,
            _ => self.red,
        }
    }

    /// Seed handed to the automated player of `side`.
    pub fn seed_for(&self, side: Side) -> u64 {
        match side {
            Side::Blue => self.seed.wrapping_add(1),
            _ => self.seed,
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            size: 6,
            red: PlayerKind::Human,
            blue: PlayerKind::Ai,
            seed: 0,
            search: SearchSettings::default(),
        }
    }
}

impl From<&Args> for GameSettings {
    fn from(args: &Args) -> Self {
        GameSettings {
            size: args.size,
            red: args.red,
            blue: args.blue,
            seed: args.seed,
            search: SearchSettings::new(args.depth),
        }
    }
}
