//! Key mapping from crossterm events to raw duel keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::Key;

/// Map a terminal key event to a [`Key`].
///
/// Only presses and auto-repeats count. Letters are lowercased so bindings
/// match regardless of Shift or Caps Lock. Ctrl-C maps to [`Key::Interrupt`].
pub fn key_from_event(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    match event.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if event.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(Key::Interrupt)
        }
        KeyCode::Char(ch) => Some(Key::Char(ch.to_ascii_lowercase())),
        _ => None,
    }
}
