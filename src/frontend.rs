//! What the game loop needs from the outside world. Positions passed in and
//! out are grid coordinates; mapping them onto a screen is the
//! implementor's job.

use anyhow::Result;
use crossterm::style::Color;

use crate::config::GridConfig;
use crate::snake::Direction;
use crate::Coords;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Turn(Direction),
    Quit,
}

pub trait Renderer {
    fn draw_border(&mut self, cfg: &GridConfig) -> Result<()>;
    fn draw_cell(&mut self, pos: Coords, color: Color, symbol: char) -> Result<()>;
    fn clear_cell(&mut self, pos: Coords) -> Result<()>;
    fn show_game_over(&mut self, score: u32) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

pub trait InputSource {
    /// Never blocks. Yields at most one intent per call; when several keys
    /// are pending the last one wins.
    fn poll_intent(&mut self) -> Result<Option<Intent>>;

    fn wait_for_key(&mut self) -> Result<()>;
}
