//! Key mapping from terminal events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Check if key should stop the animation.
///
/// Raw mode swallows SIGINT, so Ctrl-C arrives here as a key.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
