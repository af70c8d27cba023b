// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words isatty tcgetattr tcsetattr tcgetwinsize winsize

//! Unix/Linux/macOS implementation of [`TerminalDevice`] using rustix's safe termios
//! API.

use crate::{TerminalDevice, WindowSize};
use rustix::{fd::{AsFd, BorrowedFd},
             io::Errno,
             termios::{self, OptionalActions, Termios}};
use std::{fs::File, io};

/// Represents either stdin or `/dev/tty` for terminal operations.
///
/// This enum allows us to handle both cases where stdin is a tty (normal terminal usage)
/// and where stdin is redirected (e.g., piped input), requiring us to use `/dev/tty`.
#[derive(Debug)]
enum TerminalFd {
    /// Using standard input (when it's a terminal)
    Stdin(io::Stdin),
    /// Using `/dev/tty` (when stdin is redirected)
    DevTty(File),
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::DevTty(file) => file.as_fd(),
        }
    }
}

/// The controlling terminal. Attributes are read and written on the same descriptor
/// that input bytes are read from; the window size comes from stdout.
#[derive(Debug)]
pub struct TtyDevice {
    fd: TerminalFd,
}

impl TtyDevice {
    /// Checks if stdin is a tty and uses it if so; otherwise opens `/dev/tty`.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin is not a tty and `/dev/tty` cannot be opened.
    pub fn open() -> io::Result<Self> {
        let stdin = io::stdin();
        let fd = if termios::isatty(&stdin) {
            TerminalFd::Stdin(stdin)
        } else {
            tracing::debug!(message = "stdin is not a tty, falling back to /dev/tty");
            let file = File::options().read(true).write(true).open("/dev/tty")?;
            TerminalFd::DevTty(file)
        };
        Ok(Self { fd })
    }

    #[must_use]
    pub fn is_dev_tty_fallback(&self) -> bool { matches!(self.fd, TerminalFd::DevTty(_)) }
}

impl TerminalDevice for TtyDevice {
    type Attributes = Termios;

    fn read_attributes(&self) -> io::Result<Termios> {
        Ok(termios::tcgetattr(&self.fd)?)
    }

    fn write_attributes(&self, attributes: &Termios) -> io::Result<()> {
        Ok(termios::tcsetattr(
            &self.fd,
            OptionalActions::Flush,
            attributes,
        )?)
    }

    fn read_byte(&self) -> io::Result<Option<u8>> {
        let mut buf = [0_u8; 1];
        match rustix::io::read(&self.fd, &mut buf[..]) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            // Interrupted or non-blocking reads with nothing available are timeouts too.
            Err(Errno::AGAIN | Errno::INTR) => Ok(None),
            Err(errno) => Err(errno.into()),
        }
    }

    fn window_size(&self) -> io::Result<WindowSize> {
        let winsize = termios::tcgetwinsize(io::stdout())?;
        Ok(WindowSize {
            rows: winsize.ws_row,
            cols: winsize.ws_col,
        })
    }
}
