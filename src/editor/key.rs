//! Key classification for raw input tokens.

/// `ESC`.
const ESC: u8 = 0x1b;

/// What the terminal sends for backspace in raw mode.
const BACKSPACE: u8 = 0x7f;

/// The delete key, `CSI 3 ~`.
const DELETE_SEQUENCE: &[u8] = b"\x1b[3~";

/// A recognized input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Any other single byte.
    Char(u8),
    /// `ESC` on its own.
    Escape,
    /// `ESC` followed by a space, as sent by Alt+Space.
    EscapeSpace,
    /// `0x7F`.
    Backspace,
    /// `ESC [ 3 ~`.
    Delete,
    /// `\n`.
    Newline,
    /// A multi-byte sequence the editor doesn't bind.
    Unknown,
}

impl Key {
    /// Classify the bytes of one read.
    pub fn classify(bytes: &[u8]) -> Self {
        match bytes {
            [ESC] => Self::Escape,
            [ESC, b' '] => Self::EscapeSpace,
            [BACKSPACE] => Self::Backspace,
            [b'\n'] => Self::Newline,
            [byte] => Self::Char(*byte),
            DELETE_SEQUENCE => Self::Delete,
            _ => Self::Unknown,
        }
    }
}
