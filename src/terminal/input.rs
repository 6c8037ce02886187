//! Input decoding: turns stdin reads and signal pipes into [`InputEvent`]s.
//!
//! A keypress arrives as one `read()`. Escape sequences such as `ESC [ 3 ~`
//! are written by the terminal in a single burst, so the bytes returned by
//! one read are treated as one token. Reads that fill the whole token
//! buffer are discarded as unrecognized.

use super::signals::SignalPipes;
use crate::config::TOKEN_CAPACITY;
use crate::error::{EditorError, Result};
use rustix::event::{poll, PollFd, PollFlags};
use rustix::io::{read, Errno};
use std::fmt;
use std::os::fd::AsFd;

/// Bytes delivered by a single read from the terminal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    bytes: [u8; TOKEN_CAPACITY],
    len: usize,
}

impl Token {
    /// Build a token from a read.
    ///
    /// Returns `None` for an empty read or one that filled the buffer.
    pub fn new(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() || bytes.len() >= TOKEN_CAPACITY {
            return None;
        }
        let mut buf = [0u8; TOKEN_CAPACITY];
        buf[..bytes.len()].copy_from_slice(bytes);
        Some(Self {
            bytes: buf,
            len: bytes.len(),
        })
    }

    /// The bytes that were read.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token(\"{}\")", self.as_bytes().escape_ascii())
    }
}

/// What woke the editor up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A keypress or escape sequence.
    Token(Token),
    /// A read that filled the token buffer. Its bytes are dropped.
    Overflow,
    /// The terminal changed size.
    Resize,
    /// `SIGINT` or `SIGTERM` was received.
    Terminate,
}

/// Waits on an input descriptor plus the signal pipes.
#[derive(Debug)]
pub struct InputDecoder<F> {
    source: F,
    signals: SignalPipes,
}

impl<F: AsFd> InputDecoder<F> {
    /// Decode input read from `source`.
    pub fn new(source: F, signals: SignalPipes) -> Self {
        Self { source, signals }
    }

    /// Block until the next event.
    ///
    /// Signals take priority over pending input: a resize is reported before
    /// any bytes that arrived alongside it, and those bytes are read on the
    /// following call.
    ///
    /// # Errors
    ///
    /// [`EditorError::InputClosed`] when the source reaches end of file,
    /// [`EditorError::Input`] for any other read or poll failure.
    pub fn next_event(&mut self) -> Result<InputEvent> {
        loop {
            let (input_ready, resize_ready, terminate_ready) = self.wait()?;

            if terminate_ready && self.signals.take_terminate() {
                return Ok(InputEvent::Terminate);
            }
            if resize_ready && self.signals.take_resize() {
                return Ok(InputEvent::Resize);
            }
            if input_ready {
                if let Some(event) = self.read_token()? {
                    return Ok(event);
                }
            }
        }
    }

    /// Poll all descriptors, retrying when a signal interrupts the wait.
    fn wait(&self) -> Result<(bool, bool, bool)> {
        let resize = self.signals.resize_fd();
        let terminate = self.signals.terminate_fd();
        loop {
            let mut fds = [
                PollFd::new(&self.source, PollFlags::IN),
                PollFd::new(&resize, PollFlags::IN),
                PollFd::new(&terminate, PollFlags::IN),
            ];
            match poll(&mut fds, None) {
                Ok(_) => {
                    return Ok((
                        readiness(fds[0].revents())?,
                        readiness(fds[1].revents())?,
                        readiness(fds[2].revents())?,
                    ));
                }
                Err(Errno::INTR) => continue,
                Err(e) => return Err(EditorError::Input(e.into())),
            }
        }
    }

    /// Read one token. `None` means the read was interrupted and the caller
    /// should wait again, which gives a pending signal the first turn.
    fn read_token(&self) -> Result<Option<InputEvent>> {
        let mut buf = [0u8; TOKEN_CAPACITY];
        match read(&self.source, &mut buf[..]) {
            Ok(0) => Err(EditorError::InputClosed),
            Ok(n) => {
                let event = match Token::new(&buf[..n]) {
                    Some(token) => InputEvent::Token(token),
                    None => InputEvent::Overflow,
                };
                tracing::trace!(?event, "input");
                Ok(Some(event))
            }
            Err(Errno::INTR | Errno::AGAIN) => Ok(None),
            Err(e) => Err(EditorError::Input(e.into())),
        }
    }
}

/// Whether a polled descriptor can be read without blocking.
///
/// `NVAL` means the descriptor is not open and is an input error.
fn readiness(revents: PollFlags) -> Result<bool> {
    if revents.contains(PollFlags::NVAL) {
        return Err(EditorError::Input(Errno::BADF.into()));
    }
    Ok(revents.intersects(PollFlags::IN | PollFlags::HUP | PollFlags::ERR))
}
