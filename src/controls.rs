use crate::error::Error;
use crate::snake::Direction;

/// A keypress, stripped of whatever the terminal backend reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Char(char),
    Esc,
    /// Ctrl+C
    Interrupt,
    Other,
}

pub trait InputSource {
    /// Returns the next pending key, if any, without waiting.
    fn poll_key(&mut self) -> Result<Option<Key>, Error>;

    /// Waits until a key is pressed.
    fn wait_key(&mut self) -> Result<Key, Error>;

    /// Throws away keys pressed before a prompt appeared.
    fn discard_pending(&mut self) -> Result<(), Error> {
        while self.poll_key()?.is_some() {}
        Ok(())
    }
}

/// What a key means while the snake is moving.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Turn(Direction),
    Pause,
    Quit,
}

impl Key {
    pub fn action(self) -> Option<Action> {
        use Action::*;

        match self {
            Key::Char('w') | Key::Char('W') | Key::Up => Some(Turn(Direction::Up)),
            Key::Char('a') | Key::Char('A') | Key::Left => Some(Turn(Direction::Left)),
            Key::Char('s') | Key::Char('S') | Key::Down => Some(Turn(Direction::Down)),
            Key::Char('d') | Key::Char('D') | Key::Right => Some(Turn(Direction::Right)),
            Key::Char('p') | Key::Char('P') | Key::Esc => Some(Pause),
            Key::Interrupt => Some(Quit),
            _ => None,
        }
    }

    pub fn is_yes(self) -> bool {
        matches!(self, Key::Char('y') | Key::Char('Y'))
    }

    pub fn is_no(self) -> bool {
        matches!(self, Key::Char('n') | Key::Char('N') | Key::Esc | Key::Interrupt)
    }
}
