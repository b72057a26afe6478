// Keyboard input boundary
//
// Raw crossterm events are resolved into a tagged `KeyInput` exactly once,
// at the edge. Internal filter logic never inspects the raw event shape, so
// multi-character key names ("ArrowLeft", "F5", ...) cannot leak into the
// filter text: only `Char` carries text.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key event as the filter understands it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A printable character to append to the filter
    Char(char),
    /// Clears the filter
    Enter,
    /// Removes the last character
    Backspace,
    /// Passed through for focus behavior (active-tab cycling)
    Tab,
    /// A modifier chord or a bare modifier key; passed through untouched
    Modifier,
    /// Any other non-text key (arrows, function keys, Esc, ...)
    Other,
}

/// Whether the event is a modifier chord or a bare modifier key press
///
/// Shift is not a chord: shifted characters arrive as uppercase `Char`
/// events and belong in the filter text.
pub fn is_modifier_key_event(event: &KeyEvent) -> bool {
    if matches!(event.code, KeyCode::Modifier(_)) {
        return true;
    }

    event.modifiers.intersects(
        KeyModifiers::CONTROL
            | KeyModifiers::ALT
            | KeyModifiers::SUPER
            | KeyModifiers::HYPER
            | KeyModifiers::META,
    )
}

impl KeyInput {
    /// Resolve a raw key event
    pub fn from_event(event: &KeyEvent) -> Self {
        if is_modifier_key_event(event) {
            return KeyInput::Modifier;
        }

        match event.code {
            KeyCode::Tab | KeyCode::BackTab => KeyInput::Tab,
            KeyCode::Enter => KeyInput::Enter,
            KeyCode::Backspace => KeyInput::Backspace,
            KeyCode::Char(c) => KeyInput::Char(c),
            _ => KeyInput::Other,
        }
    }
}

/// Result of offering an input to the filter
///
/// Tells the caller whether the widget consumed the event or whether it
/// should bubble up for application-level handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the widget
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    #[allow(dead_code)]
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::ModifierKeyCode;

    fn event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_character() {
        assert_eq!(
            KeyInput::from_event(&event(KeyCode::Char('a'), KeyModifiers::NONE)),
            KeyInput::Char('a')
        );
    }

    #[test]
    fn test_shifted_character_is_text() {
        assert_eq!(
            KeyInput::from_event(&event(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            KeyInput::Char('A')
        );
    }

    #[test]
    fn test_control_chord_is_modifier() {
        assert_eq!(
            KeyInput::from_event(&event(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyInput::Modifier
        );
    }

    #[test]
    fn test_bare_modifier_key() {
        assert_eq!(
            KeyInput::from_event(&event(
                KeyCode::Modifier(ModifierKeyCode::LeftShift),
                KeyModifiers::NONE
            )),
            KeyInput::Modifier
        );
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(
            KeyInput::from_event(&event(KeyCode::Enter, KeyModifiers::NONE)),
            KeyInput::Enter
        );
        assert_eq!(
            KeyInput::from_event(&event(KeyCode::Backspace, KeyModifiers::NONE)),
            KeyInput::Backspace
        );
        assert_eq!(
            KeyInput::from_event(&event(KeyCode::Tab, KeyModifiers::NONE)),
            KeyInput::Tab
        );
    }

    #[test]
    fn test_named_keys_carry_no_text() {
        for code in [
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::F(5),
            KeyCode::Esc,
            KeyCode::Home,
        ] {
            assert_eq!(
                KeyInput::from_event(&event(code, KeyModifiers::NONE)),
                KeyInput::Other
            );
        }
    }
}
