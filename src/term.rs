use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, read, poll};

use crate::controls::{InputSource, Key};
use crate::error::Error;
use crate::render::{Frame, Renderer};

/// The real terminal, driven through crossterm. The board is drawn from the
/// top-left corner with the score line underneath it.
pub struct TermManager {
    stdout: Stdout,
    // Area messages are centred on: the last frame drawn, or the whole
    // terminal before the first one
    area: (u16, u16),
}

impl TermManager {
    pub fn new() -> Result<Self, Error> {
        let area = terminal::size()?;
        Ok(TermManager { stdout: stdout(), area })
    }

    pub fn setup(&mut self) -> Result<(), Error> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        self.clear()
    }

    pub fn restore(&mut self) -> Result<(), Error> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Error> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    fn print_line_at(&mut self, pos: (u16, u16), line: &str) -> Result<(), Error> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(line))?;
        Ok(())
    }
}

impl Renderer for TermManager {
    fn draw(&mut self, frame: &Frame) -> Result<(), Error> {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;

        for (y, row) in frame.rows().iter().enumerate() {
            self.print_line_at((0, y as u16), row)?;
        }
        let height = frame.rows().len() as u16;
        self.print_line_at((0, height), &frame.status_line())?;

        let width = frame.rows().first().map_or(0, |row| row.chars().count()) as u16;
        self.area = (width, height + 1);
        self.stdout.flush()?;
        Ok(())
    }

    fn show_message(&mut self, lines: &[&str]) -> Result<(), Error> {
        let msg_height = (lines.len() + 2) as u16;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as u16;
        let center = (self.area.0 / 2, self.area.1 / 2);
        let top_left = (
            center.0.saturating_sub(msg_width / 2),
            center.1.saturating_sub(msg_height / 2),
        );

        // Blank lines above and below the text
        let blank = " ".repeat(msg_width as usize);
        self.print_line_at(top_left, &blank)?;
        self.print_line_at((top_left.0, top_left.1 + msg_height - 1), &blank)?;

        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            self.print_line_at((top_left.0, top_left.1 + i as u16 + 1), &padded_line)?;
        }

        self.stdout.flush()?;
        Ok(())
    }
}

impl InputSource for TermManager {
    fn poll_key(&mut self) -> Result<Option<Key>, Error> {
        // Skip resizes and mouse events, hand over at most one key
        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                return Ok(Some(to_key(ev)));
            }
        }

        Ok(None)
    }

    fn wait_key(&mut self) -> Result<Key, Error> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(to_key(ev));
            }
        }
    }
}

fn to_key(ev: KeyEvent) -> Key {
    match ev {
        KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL } => Key::Interrupt,
        KeyEvent { code, modifiers: _ } => match code {
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Esc => Key::Esc,
            KeyCode::Char(ch) => Key::Char(ch),
            _ => Key::Other,
        }
    }
}
