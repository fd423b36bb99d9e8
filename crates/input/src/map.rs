//! Key mapping from terminal events to typing keys.

use crate::types::TypingKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key to what the typing engine sees.
///
/// Chords with Ctrl/Alt never type.
pub fn typing_key(key: KeyEvent) -> TypingKey {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return TypingKey::Other;
    }

    match key.code {
        KeyCode::Char(c) => TypingKey::from_char(c),
        KeyCode::Backspace => TypingKey::Backspace,
        _ => TypingKey::Other,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
