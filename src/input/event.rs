//! Input events and their mapping from keys

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything the grid reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Backspace,
    Submit,
    ClickCell { row: usize, col: usize },
}

impl InputEvent {
    /// Map a terminal key press
    ///
    /// Only A–Z, Backspace and Enter produce events. Letters typed with
    /// Ctrl or Alt held are treated as shortcuts and yield `None`.
    #[must_use]
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char(c)
                if c.is_ascii_alphabetic()
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Self::Letter(c))
            }
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Enter => Some(Self::Submit),
            _ => None,
        }
    }

    /// Map an on-screen key label (`"Q"`, `"ENTER"`, `"⌫"`)
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "ENTER" => Some(Self::Submit),
            "⌫" | "BACKSPACE" => Some(Self::Backspace),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => Some(Self::Letter(c)),
                    _ => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_map_in_either_case() {
        assert_eq!(
            InputEvent::from_key(&key(KeyCode::Char('c'))),
            Some(InputEvent::Letter('c'))
        );
        assert_eq!(
            InputEvent::from_key(&KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT)),
            Some(InputEvent::Letter('C'))
        );
    }

    #[test]
    fn control_keys_map() {
        assert_eq!(
            InputEvent::from_key(&key(KeyCode::Backspace)),
            Some(InputEvent::Backspace)
        );
        assert_eq!(
            InputEvent::from_key(&key(KeyCode::Enter)),
            Some(InputEvent::Submit)
        );
    }

    #[test]
    fn unrecognized_keys_produce_nothing() {
        for code in [
            KeyCode::Char('1'),
            KeyCode::Char(' '),
            KeyCode::Char('é'),
            KeyCode::Tab,
            KeyCode::Esc,
            KeyCode::Left,
            KeyCode::Delete,
        ] {
            assert_eq!(InputEvent::from_key(&key(code)), None, "{code:?}");
        }
    }

    #[test]
    fn modified_letters_are_shortcuts() {
        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        let alt_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT);
        assert_eq!(InputEvent::from_key(&ctrl_n), None);
        assert_eq!(InputEvent::from_key(&alt_a), None);
    }

    #[test]
    fn labels_map() {
        assert_eq!(InputEvent::from_label("Q"), Some(InputEvent::Letter('Q')));
        assert_eq!(InputEvent::from_label("ENTER"), Some(InputEvent::Submit));
        assert_eq!(InputEvent::from_label("⌫"), Some(InputEvent::Backspace));
        assert_eq!(InputEvent::from_label("QW"), None);
        assert_eq!(InputEvent::from_label("7"), None);
        assert_eq!(InputEvent::from_label(""), None);
    }
}
