// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Full redraw of an empty document viewport. Nothing is kept between frames.

use crate::{CLEAR_SCREEN, CRLF, CURSOR_HOME, EditorConfig, OutputDevice, ViewportGeometry,
            write_bytes_and_flush};

/// Build one frame:
///
/// ```text
/// ESC[2J ESC[H  ~\r\n  ~\r\n  ...  (geometry.rows times)  ESC[H
/// ```
///
/// Rows end with an explicit `\r\n` since output post-processing is off in raw mode.
#[must_use]
pub fn render_frame(geometry: ViewportGeometry, config: &EditorConfig) -> Vec<u8> {
    let rows = usize::from(geometry.rows);
    let mut frame = Vec::with_capacity(
        CLEAR_SCREEN.len() + 2 * CURSOR_HOME.len() + rows * (1 + CRLF.len()),
    );

    frame.extend_from_slice(CLEAR_SCREEN.as_bytes());
    frame.extend_from_slice(CURSOR_HOME.as_bytes());
    for _ in 0..rows {
        frame.push(config.placeholder);
        frame.extend_from_slice(CRLF.as_bytes());
    }
    frame.extend_from_slice(CURSOR_HOME.as_bytes());

    frame
}

/// Draw a complete frame to `output_device` with a single write.
pub fn refresh_screen(
    output_device: &OutputDevice,
    geometry: ViewportGeometry,
    config: &EditorConfig,
) {
    write_bytes_and_flush(output_device, &render_frame(geometry, config));
}
