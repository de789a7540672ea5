mod config;
mod cookie;
mod frontend;
mod game;
mod snake;
mod term;
mod ticker;

use anyhow::Result;
use log::info;

use crate::config::GridConfig;
use crate::game::{RunOutcome, SnakeGame};
use crate::term::TermManager;

pub type TermInt = u16;
pub type GridInt = i16;
pub type Coords = (GridInt, GridInt);

fn main() -> Result<()> {
    pretty_env_logger::init();

    let cfg = GridConfig::default().validate()?;
    let mut term = TermManager::new()?;
    term.ensure_fits(&cfg)?;
    term.setup()?;

    let mut game = SnakeGame::new(term, cfg);
    let outcome = game.run();

    // The terminal goes back to normal whether or not the game failed
    let restored = game.into_io().restore();
    let outcome = outcome?;
    restored?;

    match outcome {
        RunOutcome::Finished { score, reason } => {
            info!("finished: {:?}", reason);
            println!("Game over, Score: {}", score);
        }
        RunOutcome::Quit { score } => println!("Quit, Score: {}", score),
    }

    Ok(())
}
