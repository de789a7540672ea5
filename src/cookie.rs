use rand::seq::IteratorRandom;
use rand::Rng;

use crate::config::GridConfig;
use crate::snake::Snake;
use crate::Coords;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cookie {
    pos: Coords,
}

impl Cookie {
    pub fn at(pos: Coords) -> Self {
        Cookie { pos }
    }

    pub fn pos(&self) -> Coords {
        self.pos
    }

    /// Picks a uniformly random interior cell the snake doesn't cover.
    /// `None` means the snake fills the whole board.
    pub fn respawn<R: Rng + ?Sized>(cfg: &GridConfig, excluded: &Snake, rng: &mut R) -> Option<Self> {
        cfg.interior()
            .filter(|&pos| !excluded.occupies(pos))
            .choose(rng)
            .map(Cookie::at)
    }
}
