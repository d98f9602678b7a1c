use std::io;
use std::process::ExitCode;

use clap::Parser;
use flexi_logger::{Logger, LoggerHandle};
use jump61_core::Side;
use log::{debug, error};

use crate::error::DriverResult;
use crate::game::Game;
use crate::player::{AutoPlayer, HumanPlayer, Player};
use crate::settings::{Args, GameSettings, PlayerKind};

mod error;
mod game;
mod player;
mod settings;

fn make_player(settings: &GameSettings, side: Side) -> Box<dyn Player> {
    let seed = settings.seed_for(side);
    match settings.player_kind(side) {
        PlayerKind::Human => Box::new(HumanPlayer::new(side, io::stdin().lock(), io::stdout())),
        PlayerKind::Ai => Box::new(AutoPlayer::ai(side, settings.search, seed)),
        PlayerKind::Random => Box::new(AutoPlayer::random(side, seed)),
    }
}

/// Logs to stderr at `debug` with `--verbose`, `info` otherwise, unless
/// `RUST_LOG` says something else.
fn init_logger(verbose: bool) -> DriverResult<LoggerHandle> {
    let level = if verbose { "debug" } else { "info" };
    Ok(Logger::try_with_env_or_str(level)?.start()?)
}

fn run(args: &Args) -> DriverResult<()> {
    let settings = GameSettings::from(args);
    settings.validate()?;
    debug!("{:?}", settings);

    let red = make_player(&settings, Side::Red);
    let blue = make_player(&settings, Side::Blue);
    let mut game = Game::new(settings.size, red, blue, io::stdout());
    let outcome = game.play()?;
    if outcome.winner.is_none() {
        debug!("game abandoned after {} moves", outcome.record.moves().len());
    }
    debug!("moves:\n{}", outcome.record.to_move_list());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _logger = match init_logger(args.verbose) {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
