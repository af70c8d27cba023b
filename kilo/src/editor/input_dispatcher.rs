// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::DEBUG_KILO_MOD;
use crate::{DeviceReadError, EditorConfig, OutputDevice, TerminalDevice, TerminalSession,
            clear_screen_and_home_cursor};

/// Whether the event loop keeps going after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    Stop,
}

/// What a single input byte means to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Ignore,
}

/// Map one input byte to an action. Only [`EditorConfig::quit_key`] does anything.
#[must_use]
pub fn dispatch_key(key: u8, config: &EditorConfig) -> KeyAction {
    if key == config.quit_key {
        KeyAction::Quit
    } else {
        KeyAction::Ignore
    }
}

/// Block until a byte arrives. Read timeouts are retried silently.
///
/// # Errors
///
/// Returns [`DeviceReadError`] as soon as a read fails for any other reason.
pub fn read_key<D: TerminalDevice>(
    session: &TerminalSession<D>,
) -> Result<u8, DeviceReadError> {
    loop {
        if let Some(byte) = session.read_byte()? {
            return Ok(byte);
        }
    }
}

/// Read one key and act on it. On quit the screen is cleared and the cursor homed
/// before returning [`Continuation::Stop`]; the caller restores the terminal.
///
/// # Errors
///
/// Returns [`DeviceReadError`] if reading the key fails.
pub fn process_keypress<D: TerminalDevice>(
    session: &TerminalSession<D>,
    output_device: &OutputDevice,
    config: &EditorConfig,
) -> Result<Continuation, DeviceReadError> {
    let key = read_key(session)?;
    let action = dispatch_key(key, config);

    DEBUG_KILO_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "process_keypress",
            key = %key,
            action = ?action,
        );
    });

    match action {
        KeyAction::Quit => {
            clear_screen_and_home_cursor(output_device);
            Ok(Continuation::Stop)
        }
        KeyAction::Ignore => Ok(Continuation::Continue),
    }
}
