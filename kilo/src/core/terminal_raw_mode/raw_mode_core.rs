// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The raw mode session: owns the terminal device and the attributes saved before it
//! was changed, and writes them back exactly once.

use crate::{DeviceReadError, GeometryQueryError, TerminalControlError, TerminalDevice,
            ViewportGeometry, derive_raw_attributes};

/// Lifecycle of a [`TerminalSession`]. A session only exists once raw mode has been
/// applied, so there is no `Uninitialized` state to represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Raw,
    Restored,
}

/// RAII owner of the terminal while it is in raw mode.
///
/// - [`Self::enable()`] captures the current attributes once, derives the raw mode
///   attributes from them, and applies those.
/// - [`Self::restore()`] writes the captured attributes back and reports failure. It
///   consumes the session so it can't run twice.
/// - If the session is dropped while still [`SessionState::Raw`] (early return, `?`,
///   panic unwind) [`Drop`] does the restore and logs any failure.
///
/// Everything that needs the terminal while raw ([`Self::read_byte()`],
/// [`Self::query_geometry()`]) goes through the session.
#[derive(Debug)]
pub struct TerminalSession<D: TerminalDevice> {
    device: D,
    saved_attributes: D::Attributes,
    state: SessionState,
}

impl<D: TerminalDevice> TerminalSession<D> {
    /// Put `device` into raw mode.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalControlError`] if the attributes can't be read or the raw mode
    /// attributes can't be applied. In either case the device is left as it was.
    pub fn enable(device: D) -> Result<Self, TerminalControlError> {
        let saved_attributes = device
            .read_attributes()
            .map_err(TerminalControlError::read_attributes)?;

        let raw_attributes = derive_raw_attributes(&saved_attributes);

        // A failed tcsetattr changes nothing, so there is nothing to restore here.
        device
            .write_attributes(&raw_attributes)
            .map_err(TerminalControlError::write_attributes)?;

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "TerminalSession::enable -> raw mode on",
            saved = ?saved_attributes,
        );

        Ok(Self {
            device,
            saved_attributes,
            state: SessionState::Raw,
        })
    }

    /// Write the saved attributes back to the device.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalControlError`] if the attributes can't be applied. The session
    /// is consumed either way; it is not retried on drop.
    pub fn restore(mut self) -> Result<(), TerminalControlError> { self.restore_once() }

    #[must_use]
    pub fn state(&self) -> SessionState { self.state }

    #[must_use]
    pub fn saved_attributes(&self) -> &D::Attributes { &self.saved_attributes }

    /// One read with the raw mode timeout. `Ok(None)` means no input arrived in time.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceReadError`] for any failure other than a timeout.
    pub fn read_byte(&self) -> Result<Option<u8>, DeviceReadError> {
        self.device.read_byte().map_err(DeviceReadError)
    }

    /// Query the viewport size.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryQueryError`] if the query fails or reports zero columns.
    pub fn query_geometry(&self) -> Result<ViewportGeometry, GeometryQueryError> {
        ViewportGeometry::query(&self.device)
    }

    fn restore_once(&mut self) -> Result<(), TerminalControlError> {
        if self.state == SessionState::Restored {
            return Ok(());
        }
        self.state = SessionState::Restored;

        self.device
            .write_attributes(&self.saved_attributes)
            .map_err(TerminalControlError::write_attributes)?;

        tracing::debug!(message = "TerminalSession::restore -> raw mode off");
        Ok(())
    }
}

impl<D: TerminalDevice> Drop for TerminalSession<D> {
    fn drop(&mut self) {
        if let Err(error) = self.restore_once() {
            tracing::error!(
                message = "TerminalSession::drop -> failed to restore terminal",
                error = %error,
            );
        }
    }
}
