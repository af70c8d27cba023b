// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal output operations shared by the renderer, the quit path, and the fatal
//! error path.

use crate::{CLEAR_SCREEN, CURSOR_HOME, OutputDevice, lock_output_device_as_mut};

/// Clears the screen and positions cursor at home (top-left).
///
/// Write errors are ignored: this runs on the way out, often because something else
/// already failed.
pub fn clear_screen_and_home_cursor(output_device: &OutputDevice) {
    let out = lock_output_device_as_mut!(output_device);
    let _unused = out.write_all(CLEAR_SCREEN.as_bytes());
    let _unused = out.write_all(CURSOR_HOME.as_bytes());
    let _unused = out.flush(); // Immediate effect needed for screen clearing
}

/// Write a whole buffer in one go and flush it.
pub fn write_bytes_and_flush(output_device: &OutputDevice, bytes: &[u8]) {
    let out = lock_output_device_as_mut!(output_device);
    let _unused = out.write_all(bytes);
    let _unused = out.flush();
}

/// Write one line of text, terminated by `\n`.
pub fn write_line(output_device: &OutputDevice, text: &str) {
    let out = lock_output_device_as_mut!(output_device);
    let _unused = writeln!(out, "{text}");
    let _unused = out.flush();
}
