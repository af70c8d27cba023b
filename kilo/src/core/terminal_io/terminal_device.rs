// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words tcsaflush

//! The capability the editor needs from the operating environment, expressed as a
//! trait so the session, renderer and dispatcher can be driven by a real TTY
//! ([`crate::TtyDevice`]) or by a scripted mock in tests.

use crate::TerminalAttributes;
use std::io;

/// Raw window size as reported by the device, before any validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowSize {
    pub rows: u16,
    pub cols: u16,
}

/// Terminal attribute interface plus the byte-read primitive.
///
/// All methods take `&self`: the device is a handle to a file descriptor that the
/// kernel serializes access to.
pub trait TerminalDevice {
    type Attributes: TerminalAttributes;

    /// Snapshot the current attribute set.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the attributes cannot be read (eg: not a TTY).
    fn read_attributes(&self) -> io::Result<Self::Attributes>;

    /// Apply an attribute set once pending output has drained, discarding any input
    /// that was received but not yet read (`TCSAFLUSH`).
    ///
    /// # Errors
    ///
    /// Returns the OS error if the attributes cannot be applied.
    fn write_attributes(&self, attributes: &Self::Attributes) -> io::Result<()>;

    /// Wait (bounded by the read granularity currently in effect) for one byte.
    /// `Ok(None)` means the wait timed out with no data, which is not an error.
    ///
    /// # Errors
    ///
    /// Returns the OS error for any failure other than a timeout.
    fn read_byte(&self) -> io::Result<Option<u8>>;

    /// Query the window size.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the query fails.
    fn window_size(&self) -> io::Result<WindowSize>;
}
