use crate::grid::Direction;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the game to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Quit,
}

impl Command {
    /// Key presses only; releases, repeats and other terminal events are
    /// dropped.
    pub fn from_event(event: Event) -> Option<Command> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Command::from_key_event(key),
            _ => None,
        }
    }

    pub fn from_key_event(key: KeyEvent) -> Option<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                Some(Command::Turn(Direction::Up))
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                Some(Command::Turn(Direction::Down))
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                Some(Command::Turn(Direction::Left))
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(Command::Turn(Direction::Right))
            }
            KeyCode::Char(' ') => Some(Command::TogglePause),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
            _ => None,
        }
    }
}
