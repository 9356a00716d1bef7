use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What a keypress asks for. Pure translation; the event loop decides how an
/// intent applies given the current state (digits only matter while the shop
/// overlay is open, Dismiss doubles as quit when it is not).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Steer(Direction),
    TogglePause,
    Restart,
    /// Digit key: picks an offer while the shop overlay is open.
    Select(u8),
    /// Enter or Esc: closes the overlay, or quits when none is open (Esc).
    Dismiss,
    Quit,
    Ignored,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn translate(&self, key: KeyEvent) -> Intent {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Intent::Quit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                Intent::Steer(Direction::Up)
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                Intent::Steer(Direction::Down)
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                Intent::Steer(Direction::Left)
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                Intent::Steer(Direction::Right)
            }

            KeyCode::Char(' ') => Intent::TogglePause,
            KeyCode::Char('r') | KeyCode::Char('R') => Intent::Restart,
            KeyCode::Char(c @ '1'..='9') => Intent::Select(c as u8 - b'0'),
            KeyCode::Enter | KeyCode::Esc => Intent::Dismiss,
            KeyCode::Char('q') | KeyCode::Char('Q') => Intent::Quit,

            _ => Intent::Ignored,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
