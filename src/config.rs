use std::time::Duration;

use anyhow::{ensure, Result};
use crossterm::style::Color;

use crate::{Coords, GridInt};

pub const DEFAULT_WIDTH: GridInt = 32;
pub const DEFAULT_HEIGHT: GridInt = 16;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;
pub const DEFAULT_INITIAL_SCORE: u32 = 5;

// Smallest grid with a non-empty interior inside the border ring
const MIN_SIDE: GridInt = 3;

pub const BORDER_CHAR: char = '■';
pub const SNAKE_BODY_CHAR: char = '■';
pub const COOKIE_CHAR: char = '■';

/// Settings read once at startup. Nothing mutates a `GridConfig` after
/// `validate` has accepted it; the running score lives in the game state.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub width: GridInt,
    pub height: GridInt,
    pub tick_interval: Duration,
    pub initial_score: u32,
    pub cookie_color: Color,
    pub border_color: Color,
    pub head_color: Color,
    pub body_color: Color,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            initial_score: DEFAULT_INITIAL_SCORE,
            cookie_color: Color::Red,
            border_color: Color::Yellow,
            head_color: Color::Cyan,
            body_color: Color::Green,
        }
    }
}

impl GridConfig {
    /// Rejects grids that leave no playable interior.
    pub fn validate(self) -> Result<Self> {
        ensure!(
            self.width >= MIN_SIDE && self.height >= MIN_SIDE,
            "grid must be at least {}x{}, got {}x{}",
            MIN_SIDE, MIN_SIDE, self.width, self.height
        );
        Ok(self)
    }

    pub fn center(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }

    /// Every cell inside the border ring, row by row.
    pub fn interior(&self) -> impl Iterator<Item = Coords> {
        let (width, height) = (self.width, self.height);
        (1..height - 1).flat_map(move |y| (1..width - 1).map(move |x| (x, y)))
    }
}
