use crate::config::{GridConfig, BORDER_CHAR};
use crate::frontend::{InputSource, Intent, Renderer};
use crate::snake::Direction::*;
use crate::{Coords, GridInt, TermInt};
use std::convert::TryFrom;
use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::{anyhow, ensure, Context, Result};
use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::{self, Color};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, terminal};

/// Grid cells map one-to-one onto terminal cells, grid origin at the
/// terminal's top-left corner.
pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    board: (TermInt, TermInt),
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        Ok(TermManager { width, height, stdout: stdout(), board: (width, height) })
    }

    pub fn ensure_fits(&self, cfg: &GridConfig) -> Result<()> {
        ensure!(
            i32::from(cfg.width) <= i32::from(self.width) && i32::from(cfg.height) <= i32::from(self.height),
            "terminal is {}x{}, the board needs {}x{}",
            self.width, self.height, cfg.width, cfg.height
        );
        Ok(())
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error setting raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))
            .context("Error preparing the screen")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Error resetting raw mode")?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
            .context("Error leaving alt screen")?;
        Ok(())
    }

    fn print_at(&mut self, pos: Coords, color: Option<Color>, ch: char) -> Result<()> {
        let (x, y) = to_term(pos)?;
        match color {
            Some(c) => queue!(self.stdout, cursor::MoveTo(x, y), style::SetForegroundColor(c), style::Print(ch))?,
            None => queue!(self.stdout, cursor::MoveTo(x, y), style::Print(ch))?,
        }
        Ok(())
    }

    fn print_line_at(&mut self, pos: (TermInt, TermInt), line: &str) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(line))?;
        Ok(())
    }

    fn drain_key_events(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }
}

impl Renderer for TermManager {
    fn draw_border(&mut self, cfg: &GridConfig) -> Result<()> {
        let (end_x, end_y) = (cfg.width - 1, cfg.height - 1);
        let color = Some(cfg.border_color);
        self.board = to_term((cfg.width, cfg.height))?;

        for x in 0..cfg.width {
            self.print_at((x, 0), color, BORDER_CHAR)?;
            self.print_at((x, end_y), color, BORDER_CHAR)?;
        }

        for y in 1..end_y {
            self.print_at((0, y), color, BORDER_CHAR)?;
            self.print_at((end_x, y), color, BORDER_CHAR)?;
        }

        self.flush()
    }

    fn draw_cell(&mut self, pos: Coords, color: Color, symbol: char) -> Result<()> {
        self.print_at(pos, Some(color), symbol)
    }

    fn clear_cell(&mut self, pos: Coords) -> Result<()> {
        self.print_at(pos, None, ' ')
    }

    fn show_game_over(&mut self, score: u32) -> Result<()> {
        let lines = [format!("Game over, Score: {}", score), "Press any key to exit".to_string()];
        let msg_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as TermInt + 2;
        let (board_w, board_h) = self.board;
        let left = (board_w / 2).saturating_sub(msg_width / 2);
        let top = (board_h / 2).saturating_sub(1);

        queue!(self.stdout, style::ResetColor)?;
        for (i, line) in lines.iter().enumerate() {
            let padded = format!("{line: ^width$}", line = line, width = msg_width as usize);
            self.print_line_at((left, top + i as TermInt), &padded)?;
        }

        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }
}

impl InputSource for TermManager {
    fn poll_intent(&mut self) -> Result<Option<Intent>> {
        Ok(fold_intents(self.drain_key_events()?.iter().filter_map(intent_for_key)))
    }

    fn wait_for_key(&mut self) -> Result<()> {
        // Keys hit during play shouldn't count as the acknowledgment
        self.drain_key_events()?;

        loop {
            if let Event::Key(_) = read()? {
                return Ok(());
            }
        }
    }
}

fn to_term(pos: Coords) -> Result<(TermInt, TermInt)> {
    let conv = |v: GridInt| TermInt::try_from(v);
    match (conv(pos.0), conv(pos.1)) {
        (Ok(x), Ok(y)) => Ok((x, y)),
        _ => Err(anyhow!("cell {:?} is off screen", pos)),
    }
}

fn intent_for_key(ev: &KeyEvent) -> Option<Intent> {
    match ev {
        KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL } => Some(Intent::Quit),
        KeyEvent { code, modifiers: _ } => match code {
            KeyCode::Char('w') | KeyCode::Up => Some(Intent::Turn(Up)),
            KeyCode::Char('a') | KeyCode::Left => Some(Intent::Turn(Left)),
            KeyCode::Char('s') | KeyCode::Down => Some(Intent::Turn(Down)),
            KeyCode::Char('d') | KeyCode::Right => Some(Intent::Turn(Right)),
            _ => None,
        },
    }
}

/// Last key of the batch wins, except that a quit is never overridden.
fn fold_intents<I: IntoIterator<Item = Intent>>(intents: I) -> Option<Intent> {
    intents.into_iter().fold(None, |acc, next| match acc {
        Some(Intent::Quit) => acc,
        _ => Some(next),
    })
}
