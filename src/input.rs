// src/input.rs - Key event to command translation

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::command::Command;

/// Translate a key press into at most one command.
///
/// Terminals encode backspace either as DEL (reported as `Backspace`) or as
/// BS (reported as Ctrl+H); both mean the same backspace command.
pub fn key_to_command(key_event: KeyEvent) -> Option<Command> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    let control = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Backspace => Some(Command::DeleteBackward),
        KeyCode::Char('h') if control => Some(Command::DeleteBackward),
        KeyCode::Char(_) if control || key_event.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(c) => Some(Command::InsertChar(c)),
        KeyCode::Tab => Some(Command::InsertChar('\t')),
        KeyCode::Enter => Some(Command::InsertLineSeparator),
        KeyCode::Delete => Some(Command::DeleteForward),
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Up => Some(Command::MoveUp),
        KeyCode::Down => Some(Command::MoveDown),
        KeyCode::Home => Some(Command::MoveLineStart),
        KeyCode::End => Some(Command::MoveLineEnd),
        _ => None,
    }
}
