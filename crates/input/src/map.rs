//! Key mapping from terminal events to movement commands.
//!
//! The assignment below (WASD + QE, arrows as aliases) is the configurable
//! surface: the rest of the system only sees [`Command`]s, so rebinding is
//! a matter of editing this table.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to movement commands.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Turning
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::TurnLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::TurnRight),

        // Translation
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::MoveForward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::MoveBackward),

        // Strafing (perpendicular to facing)
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::StrafeLeft),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(Command::StrafeRight),

        _ => None,
    }
}

/// Check if key should quit. `q` is taken by strafing, so quitting is
/// Esc or ctrl-c.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
