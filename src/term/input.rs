//! Terminal key input - maps crossterm events onto the game vocabulary

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::{InputEvent, INPUT_TIMEOUT_MS};
use crate::ui::InputSource;

/// Reads key events from the terminal with a bounded wait, so the
/// caller can re-check exit conditions about once a second even when
/// the player walks away.
pub struct TerminalInput {
    timeout: Duration,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_millis(INPUT_TIMEOUT_MS),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn next_event(&mut self) -> Result<InputEvent> {
        if !event::poll(self.timeout)? {
            return Ok(InputEvent::Timeout);
        }
        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(InputEvent::Invalid),
        }
    }
}

/// Key bindings: arrows or A/S/D move, W or Up hard-drops, J/Z and K/X
/// rotate, Esc, Q, P or Ctrl-C opens the pause dialog. Letters work in
/// both cases.
pub fn map_key(key: KeyEvent) -> InputEvent {
    if key.kind == KeyEventKind::Release {
        return InputEvent::Invalid;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => InputEvent::PauseQuit,
            _ => InputEvent::Invalid,
        };
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => InputEvent::MoveLeft,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => InputEvent::MoveRight,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => InputEvent::MoveDown,
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => InputEvent::HardDrop,
        KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('z') | KeyCode::Char('Z') => {
            InputEvent::RotateLeft
        }
        KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('x') | KeyCode::Char('X') => {
            InputEvent::RotateRight
        }
        KeyCode::Esc
        | KeyCode::Char('q')
        | KeyCode::Char('Q')
        | KeyCode::Char('p')
        | KeyCode::Char('P') => InputEvent::PauseQuit,
        _ => InputEvent::Invalid,
    }
}
