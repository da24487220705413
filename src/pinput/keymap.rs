//! Key bindings for the pin input component.

use crate::key::{Binding, KeyPress};
use crossterm::event::{KeyCode, KeyModifiers};

/// KeyMap is the set of key bindings the pin input reacts to beyond plain
/// character keys.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Delete the last entered character.
    pub delete_character_backward: Binding,
    /// Paste from clipboard (bulk commit path).
    pub paste: Binding,
}

/// The default key bindings for the pin input.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        delete_character_backward: Binding::new(vec![
            KeyPress::from(KeyCode::Backspace),
            KeyPress::from((KeyCode::Char('h'), KeyModifiers::CONTROL)),
        ])
        .with_help("backspace", "delete last digit"),
        paste: Binding::new(vec![(KeyCode::Char('v'), KeyModifiers::CONTROL)])
            .with_help("ctrl+v", "paste"),
    }
}
