use anyhow::Result;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GridConfig, COOKIE_CHAR, SNAKE_BODY_CHAR};
use crate::cookie::Cookie;
use crate::frontend::{InputSource, Intent, Renderer};
use crate::snake::{Direction::{self, *}, Snake};
use crate::ticker::Ticker;
use crate::Coords;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    HitWall,
    HitSelf,
    /// No free cell left for a new cookie.
    BoardFull,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver(GameOverReason),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running. `erased` is the tail cell freed this tick, if any.
    Moved { erased: Option<Coords> },
    Over(GameOverReason),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Finished { score: u32, reason: GameOverReason },
    Quit { score: u32 },
}

/// Everything that changes while a game is played. The config is a
/// read-only snapshot; the score is owned here.
pub struct GameState<R: Rng = StdRng> {
    cfg: GridConfig,
    snake: Snake,
    cookie: Option<Cookie>,
    score: u32,
    ticks: u64,
    status: Status,
    rng: R,
}

impl GameState<StdRng> {
    pub fn new(cfg: GridConfig) -> Self {
        GameState::with_rng(cfg, StdRng::from_entropy())
    }
}

impl<R: Rng> GameState<R> {
    pub fn with_rng(cfg: GridConfig, mut rng: R) -> Self {
        let snake = Snake::new(cfg.center(), Right);
        let cookie = Cookie::respawn(&cfg, &snake, &mut rng);
        let status = match cookie {
            Some(_) => Status::Running,
            None => Status::GameOver(GameOverReason::BoardFull),
        };

        GameState { score: cfg.initial_score, cfg, snake, cookie, ticks: 0, status, rng }
    }

    pub fn config(&self) -> &GridConfig {
        &self.cfg
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn cookie(&self) -> Option<Cookie> {
        self.cookie
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// One simulation step. Does nothing once the game is over.
    pub fn tick(&mut self, input: Option<Direction>) -> TickOutcome {
        if let Status::GameOver(reason) = self.status() {
            return TickOutcome::Over(reason);
        }

        if let Some(dir) = input {
            if self.snake.set_direction(dir) {
                debug!("heading {:?}", dir);
            } else {
                trace!("ignored reversal to {:?}", dir);
            }
        }

        let dir = self.snake.direction();
        self.snake.advance(dir);
        let erased = self.snake.trim_to_length(self.score as usize);
        self.ticks += 1;
        trace!("tick {}: head at {:?}, length {}", self.ticks, self.snake.head(), self.snake.len());

        if self.snake.is_out_of_bounds(self.cfg.width, self.cfg.height) {
            return self.end(GameOverReason::HitWall);
        }
        if self.snake.collides_with_self() {
            return self.end(GameOverReason::HitSelf);
        }

        if self.cookie.map(|c| c.pos()) == Some(self.snake.head()) {
            self.score += 1;
            self.cookie = Cookie::respawn(&self.cfg, &self.snake, &mut self.rng);
            debug!("cookie eaten, score {}, next cookie {:?}", self.score, self.cookie);

            if self.cookie.is_none() {
                return self.end(GameOverReason::BoardFull);
            }
        }

        TickOutcome::Moved { erased }
    }

    fn end(&mut self, reason: GameOverReason) -> TickOutcome {
        info!("game over after {} ticks: {:?}, score {}", self.ticks, reason, self.score);
        self.status = Status::GameOver(reason);
        TickOutcome::Over(reason)
    }

    #[cfg(test)]
    pub(crate) fn place_cookie(&mut self, pos: Coords) {
        self.cookie = Some(Cookie::at(pos));
    }
}

/// Drives a `GameState` against a screen and a keyboard, one tick per
/// interval, until the game ends or the player quits.
pub struct SnakeGame<T, R: Rng = StdRng> {
    io: T,
    state: GameState<R>,
    ticker: Ticker,
}

impl<T: Renderer + InputSource> SnakeGame<T, StdRng> {
    pub fn new(io: T, cfg: GridConfig) -> Self {
        SnakeGame::with_state(io, GameState::new(cfg))
    }
}

impl<T: Renderer + InputSource, R: Rng> SnakeGame<T, R> {
    pub fn with_state(io: T, state: GameState<R>) -> Self {
        let ticker = Ticker::new(state.config().tick_interval);
        SnakeGame { io, state, ticker }
    }

    pub fn into_io(self) -> T {
        self.io
    }

    pub fn run(&mut self) -> Result<RunOutcome> {
        info!(
            "starting {}x{} game, tick every {:?}",
            self.state.config().width,
            self.state.config().height,
            self.ticker.interval()
        );

        self.io.draw_border(self.state.config())?;
        self.render(None)?;

        loop {
            self.ticker.wait();

            let turn = match self.io.poll_intent()? {
                Some(Intent::Quit) => {
                    info!("player quit after {} ticks, score {}", self.state.ticks(), self.state.score());
                    return Ok(RunOutcome::Quit { score: self.state.score() });
                }
                Some(Intent::Turn(dir)) => Some(dir),
                None => None,
            };

            match self.state.tick(turn) {
                TickOutcome::Moved { erased } => self.render(erased)?,
                TickOutcome::Over(reason) => {
                    let score = self.state.score();
                    self.io.show_game_over(score)?;
                    self.io.flush()?;
                    self.io.wait_for_key()?;
                    return Ok(RunOutcome::Finished { score, reason });
                }
            }
        }
    }

    fn render(&mut self, erased: Option<Coords>) -> Result<()> {
        let cfg = self.state.config();
        let snake = self.state.snake();

        if let Some(pos) = erased {
            self.io.clear_cell(pos)?;
        }

        for &pos in snake.body() {
            self.io.draw_cell(pos, cfg.body_color, SNAKE_BODY_CHAR)?;
        }
        self.io.draw_cell(snake.head(), cfg.head_color, snake.head_char())?;

        if let Some(cookie) = self.state.cookie() {
            self.io.draw_cell(cookie.pos(), cfg.cookie_color, COOKIE_CHAR)?;
        }

        self.io.flush()
    }
}
