//! Modes and the key bindings of each.

use super::key::Key;
use crate::buffer::Motion;
use crate::view::is_printable;

/// Editing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Keys move the cursor and run commands.
    #[default]
    Normal,
    /// Printable keys are inserted into the buffer.
    Insert,
}

/// What a key does in the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// End the session.
    Quit,
    /// Switch to [`Mode::Insert`].
    EnterInsert,
    /// Save the buffer and switch to [`Mode::Normal`].
    LeaveInsert,
    /// Move the cursor.
    Move(Motion),
    /// Insert a byte at the cursor.
    Insert(u8),
    /// Delete the byte under the cursor.
    DeleteForward,
    /// Delete the byte before the cursor.
    DeleteBackward,
    /// Nothing is bound to the key.
    Ignore,
}

impl Mode {
    /// Look up the binding for `key`.
    pub const fn action(self, key: Key) -> Action {
        match self {
            Self::Normal => normal_action(key),
            Self::Insert => insert_action(key),
        }
    }
}

const fn normal_action(key: Key) -> Action {
    match key {
        Key::Char(b'q') => Action::Quit,
        Key::Char(b'e' | b' ') | Key::EscapeSpace => Action::EnterInsert,
        // `s` goes to the line above and `w` to the line below.
        Key::Char(b's') => Action::Move(Motion::LineUp),
        Key::Char(b'w') => Action::Move(Motion::LineDown),
        Key::Char(b'a') => Action::Move(Motion::CharLeft),
        Key::Char(b'd') => Action::Move(Motion::CharRight),
        Key::Char(b'k') => Action::Move(Motion::WordLeft),
        Key::Char(b';') => Action::Move(Motion::WordRight),
        Key::Char(b'o') => Action::Move(Motion::ParagraphUp),
        Key::Char(b'l') => Action::Move(Motion::ParagraphDown),
        Key::Char(b'O') => Action::Move(Motion::BufferStart),
        Key::Char(b'L') => Action::Move(Motion::BufferEnd),
        Key::Char(b'K') => Action::Move(Motion::LineStart),
        Key::Char(b':') => Action::Move(Motion::LineEnd),
        Key::Delete => Action::DeleteForward,
        Key::Backspace => Action::DeleteBackward,
        Key::Newline => Action::Insert(b'\n'),
        Key::Char(_) | Key::Escape | Key::Unknown => Action::Ignore,
    }
}

const fn insert_action(key: Key) -> Action {
    match key {
        Key::Escape | Key::EscapeSpace => Action::LeaveInsert,
        Key::Backspace => Action::DeleteBackward,
        Key::Delete => Action::DeleteForward,
        Key::Newline => Action::Insert(b'\n'),
        Key::Char(byte) if is_printable(byte) => Action::Insert(byte),
        Key::Char(_) | Key::Unknown => Action::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_mode_is_normal() {
        assert_eq!(Mode::default(), Mode::Normal);
    }

    #[test]
    fn test_normal_bindings() {
        let table = [
            (b'q', Action::Quit),
            (b'e', Action::EnterInsert),
            (b' ', Action::EnterInsert),
            (b's', Action::Move(Motion::LineUp)),
            (b'w', Action::Move(Motion::LineDown)),
            (b'a', Action::Move(Motion::CharLeft)),
            (b'd', Action::Move(Motion::CharRight)),
            (b'k', Action::Move(Motion::WordLeft)),
            (b';', Action::Move(Motion::WordRight)),
            (b'o', Action::Move(Motion::ParagraphUp)),
            (b'l', Action::Move(Motion::ParagraphDown)),
            (b'O', Action::Move(Motion::BufferStart)),
            (b'L', Action::Move(Motion::BufferEnd)),
            (b'K', Action::Move(Motion::LineStart)),
            (b':', Action::Move(Motion::LineEnd)),
            (b'x', Action::Ignore),
            (b'Q', Action::Ignore),
        ];
        for (byte, action) in table {
            assert_eq!(Mode::Normal.action(Key::Char(byte)), action, "key {:?}", byte as char);
        }

        assert_eq!(Mode::Normal.action(Key::EscapeSpace), Action::EnterInsert);
        assert_eq!(Mode::Normal.action(Key::Escape), Action::Ignore);
        assert_eq!(Mode::Normal.action(Key::Delete), Action::DeleteForward);
        assert_eq!(Mode::Normal.action(Key::Backspace), Action::DeleteBackward);
        assert_eq!(Mode::Normal.action(Key::Newline), Action::Insert(b'\n'));
        assert_eq!(Mode::Normal.action(Key::Unknown), Action::Ignore);
    }

    #[test]
    fn test_insert_bindings() {
        assert_eq!(Mode::Insert.action(Key::Escape), Action::LeaveInsert);
        assert_eq!(Mode::Insert.action(Key::EscapeSpace), Action::LeaveInsert);
        assert_eq!(Mode::Insert.action(Key::Backspace), Action::DeleteBackward);
        assert_eq!(Mode::Insert.action(Key::Delete), Action::DeleteForward);
        assert_eq!(Mode::Insert.action(Key::Newline), Action::Insert(b'\n'));
        assert_eq!(Mode::Insert.action(Key::Char(b'q')), Action::Insert(b'q'));
        assert_eq!(Mode::Insert.action(Key::Char(b' ')), Action::Insert(b' '));
        assert_eq!(Mode::Insert.action(Key::Char(b'~')), Action::Insert(b'~'));
    }

    #[test]
    fn test_insert_ignores_control_bytes() {
        assert_eq!(Mode::Insert.action(Key::Char(b'\t')), Action::Ignore);
        assert_eq!(Mode::Insert.action(Key::Char(0x03)), Action::Ignore);
        assert_eq!(Mode::Insert.action(Key::Char(0xc3)), Action::Ignore);
        assert_eq!(Mode::Insert.action(Key::Unknown), Action::Ignore);
    }
}
