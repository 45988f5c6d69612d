//! Single-line text input used by the screens' search and entry fields.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// An edit to a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    /// Ctrl+U.
    Clear,
}

impl TextEdit {
    /// Map a key press to an edit, if it is one.
    ///
    /// Control and Alt chords are left for screen shortcuts.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Self::Clear),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Self::Insert(c))
            }
            KeyCode::Backspace => Some(Self::Backspace),
            _ => None,
        }
    }

    pub fn apply(self, mut text: String) -> String {
        match self {
            Self::Insert(c) => text.push(c),
            Self::Backspace => {
                text.pop();
            }
            Self::Clear => text.clear(),
        }
        text
    }
}

/// Numeric field semantics: blank or unparsable input counts as zero.
pub fn parse_or_zero(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
