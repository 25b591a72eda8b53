// keymap.rs - Mode-aware translation of key events into commands

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::command::Command;
use crate::mode::Mode;

/// Resolve one key event for the given mode. `None` means the key is ignored.
pub fn key_to_command(key_event: KeyEvent, mode: Mode) -> Option<Command> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    if key_event.code == KeyCode::Esc {
        return Some(Command::Cancel);
    }
    // Chords carry no printable character.
    if key_event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match mode {
        Mode::View => match key_event.code {
            KeyCode::Char('q') => Some(Command::SaveAndQuit),
            KeyCode::Char('e') => Some(Command::EnterEdit),
            _ => None,
        },
        Mode::Edit => match key_event.code {
            KeyCode::Char(' ') => Some(Command::InsertChar(' ')),
            KeyCode::Backspace => Some(Command::DeleteChar),
            KeyCode::Enter => Some(Command::NewLine),
            KeyCode::Char(c) => Some(Command::InsertChar(c)),
            _ => None,
        },
    }
}
