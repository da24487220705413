//! Type-safe key bindings for the pin input widget.
//!
//! A [`Binding`] pairs one or more key combinations with optional help text
//! and can be matched against incoming [`bubbletea_rs::KeyMsg`] values:
//!
//! ```rust
//! use bubbletea_pinput::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let paste = Binding::new(vec![(KeyCode::Char('v'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+v", "paste");
//! let backspace = Binding::new(vec![KeyCode::Backspace]);
//! assert!(!backspace.keys().is_empty());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code of the combination.
    pub code: KeyCode,
    /// Modifier keys that must be active.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// A key binding: the set of key combinations that trigger an action,
/// plus help text for display.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    /// Short key label for help views, e.g. "ctrl+v".
    pub help: String,
    /// Description of the action, e.g. "paste".
    pub description: String,
}

impl Binding {
    /// Creates a binding from key combinations. Accepts bare [`KeyCode`]s or
    /// `(KeyCode, KeyModifiers)` tuples.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: String::new(),
            description: String::new(),
        }
    }

    /// Attaches help text to the binding.
    pub fn with_help(mut self, help: impl Into<String>, description: impl Into<String>) -> Self {
        self.help = help.into();
        self.description = description.into();
        self
    }

    /// Returns the key combinations of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Reports whether the key message matches any combination in this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.keys
            .iter()
            .any(|k| k.code == msg.key && k.mods == msg.modifiers)
    }
}

/// Convenience check of a key message against a binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, mods: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: mods,
        }
    }

    #[test]
    fn test_matches_plain_key() {
        let b = Binding::new(vec![KeyCode::Backspace]);
        assert!(b.matches(&key(KeyCode::Backspace, KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Delete, KeyModifiers::NONE)));
    }

    #[test]
    fn test_matches_with_modifiers() {
        let b = Binding::new(vec![(KeyCode::Char('v'), KeyModifiers::CONTROL)]);
        assert!(b.matches(&key(KeyCode::Char('v'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('v'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_help_text() {
        let b = Binding::new(vec![KeyCode::Enter]).with_help("enter", "submit");
        assert_eq!(b.help, "enter");
        assert_eq!(b.description, "submit");
    }
}
