//! Self-pipes for asynchronous signals.
//!
//! Each watched signal writes a byte into a socket pair from inside the
//! handler. The read ends are polled next to stdin, so a signal shows up as
//! an ordinary readable descriptor instead of interrupting editor state
//! mid-update.
//!
//! `SIGINT` and `SIGTERM` also carry a conditional default handler. While a
//! [`SignalPipes`] is alive it stays inert; once the value drops, those
//! signals terminate the process as if no handler had ever been installed.

use signal_hook::consts::{SIGINT, SIGTERM, SIGWINCH};
use signal_hook::flag;
use signal_hook::low_level::{pipe, unregister};
use signal_hook::SigId;
use std::io::{self, Read};
use std::os::fd::{AsFd, BorrowedFd};
use std::os::unix::net::UnixStream;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Registered signal handlers and the read ends of their pipes.
///
/// Dropping the value unregisters every pipe handler it installed and puts
/// `SIGINT` and `SIGTERM` back to their default action.
#[derive(Debug)]
pub struct SignalPipes {
    resize: UnixStream,
    terminate: UnixStream,
    ids: Vec<SigId>,
    released: Arc<AtomicBool>,
}

impl SignalPipes {
    /// Install handlers for `SIGWINCH`, `SIGINT` and `SIGTERM`.
    ///
    /// # Errors
    ///
    /// Returns an error if a socket pair cannot be created or a handler
    /// cannot be installed. Handlers installed before the failure are removed.
    pub fn register() -> io::Result<Self> {
        let released = release_flag()?;
        let (resize, resize_tx) = nonblocking_pair()?;
        let (terminate, terminate_tx) = nonblocking_pair()?;

        released.store(false, Ordering::SeqCst);
        let mut pipes = Self {
            resize,
            terminate,
            ids: Vec::with_capacity(3),
            released,
        };
        pipes.ids.push(pipe::register(SIGWINCH, resize_tx)?);
        pipes.ids.push(pipe::register(SIGINT, terminate_tx.try_clone()?)?);
        pipes.ids.push(pipe::register(SIGTERM, terminate_tx)?);

        tracing::debug!("signal handlers installed");
        Ok(pipes)
    }

    /// Read end that becomes readable on `SIGWINCH`.
    #[inline]
    pub fn resize_fd(&self) -> BorrowedFd<'_> {
        self.resize.as_fd()
    }

    /// Read end that becomes readable on `SIGINT` or `SIGTERM`.
    #[inline]
    pub fn terminate_fd(&self) -> BorrowedFd<'_> {
        self.terminate.as_fd()
    }

    /// Consume pending resize notifications.
    ///
    /// Returns `true` if at least one was pending. Several resizes that land
    /// before the editor gets to them collapse into one.
    pub fn take_resize(&self) -> bool {
        drain(&self.resize)
    }

    /// Consume pending termination requests.
    pub fn take_terminate(&self) -> bool {
        drain(&self.terminate)
    }
}

impl Drop for SignalPipes {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            unregister(id);
        }
        self.released.store(true, Ordering::SeqCst);
        tracing::debug!("signal handlers removed");
    }
}

/// Flag shared by the conditional default handlers.
///
/// The handlers are installed once per process and never removed; `true`
/// means no [`SignalPipes`] is alive and the default action applies.
fn release_flag() -> io::Result<Arc<AtomicBool>> {
    static FLAG: Mutex<Option<Arc<AtomicBool>>> = Mutex::new(None);

    let mut slot = FLAG.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(released) = slot.as_ref() {
        return Ok(Arc::clone(released));
    }
    let released = Arc::new(AtomicBool::new(true));
    flag::register_conditional_default(SIGINT, Arc::clone(&released))?;
    flag::register_conditional_default(SIGTERM, Arc::clone(&released))?;
    *slot = Some(Arc::clone(&released));
    Ok(released)
}

fn nonblocking_pair() -> io::Result<(UnixStream, UnixStream)> {
    let (rx, tx) = UnixStream::pair()?;
    rx.set_nonblocking(true)?;
    tx.set_nonblocking(true)?;
    Ok((rx, tx))
}

/// Read until the pipe would block.
fn drain(mut stream: &UnixStream) -> bool {
    let mut scratch = [0u8; 64];
    let mut any = false;
    loop {
        match stream.read(&mut scratch) {
            Ok(0) => return any,
            Ok(_) => any = true,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(_) => return any,
        }
    }
}
