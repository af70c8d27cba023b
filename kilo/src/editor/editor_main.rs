// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Session lifecycle around the render and input loop:
//!
//! ```text
//! enable raw mode ──▶ query geometry ──▶ ┌─▶ refresh_screen
//!                                        │       │
//!                                        │   process_keypress ── quit ──▶ restore ──▶ exit 0
//!                                        └───────┘
//! any error ──▶ clear + home ──▶ restore ──▶ diagnostic(s) ──▶ exit 1
//! ```

use crate::{Continuation, EditorConfig, KiloError, OutputDevice, TerminalDevice,
            TerminalSession, clear_screen_and_home_cursor, process_keypress,
            refresh_screen, write_line};

/// Process exit status of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self { std::process::ExitCode::from(status.code()) }
}

/// Render, then handle one key, until the quit key arrives. The geometry is queried
/// once, after raw mode is on.
///
/// # Errors
///
/// Returns [`KiloError`] if the geometry query or a read fails.
pub fn run_event_loop<D: TerminalDevice>(
    session: &TerminalSession<D>,
    output_device: &OutputDevice,
    config: &EditorConfig,
) -> Result<(), KiloError> {
    let geometry = session.query_geometry()?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "run_event_loop -> start", geometry = ?geometry);

    loop {
        refresh_screen(output_device, geometry, config);
        match process_keypress(session, output_device, config)? {
            Continuation::Continue => {}
            Continuation::Stop => break,
        }
    }

    tracing::debug!(message = "run_event_loop -> quit");
    Ok(())
}

/// Run the editor on `device`: raw mode, event loop, restore.
///
/// Frames go to `output_device`. Error lines go to `diagnostics_device`, which is
/// written only after the screen was cleared and the terminal restored. Whatever
/// happens, the saved terminal attributes are written back before this returns (or
/// while unwinding from a panic).
#[must_use]
pub fn run_app<D: TerminalDevice>(
    device: D,
    output_device: &OutputDevice,
    diagnostics_device: &OutputDevice,
    config: &EditorConfig,
) -> ExitStatus {
    let session = match TerminalSession::enable(device) {
        Ok(session) => session,
        Err(error) => {
            clear_screen_and_home_cursor(output_device);
            return report_fatal_errors(diagnostics_device, &[error.into()]);
        }
    };

    let loop_result = run_event_loop(&session, output_device, config);
    if loop_result.is_err() {
        clear_screen_and_home_cursor(output_device);
    }
    let restore_result = session.restore();

    let errors: Vec<KiloError> = [loop_result.err(), restore_result.err().map(Into::into)]
        .into_iter()
        .flatten()
        .collect();

    if errors.is_empty() {
        ExitStatus::Success
    } else {
        report_fatal_errors(diagnostics_device, &errors)
    }
}

/// Print one diagnostic line per error (the first one is the cause, the rest happened
/// while cleaning up). The screen must already be cleared. Always returns
/// [`ExitStatus::Failure`].
#[must_use]
pub fn report_fatal_errors(
    diagnostics_device: &OutputDevice,
    errors: &[KiloError],
) -> ExitStatus {
    for error in errors {
        tracing::error!(message = "run_app -> fatal", error = ?error);
        write_line(diagnostics_device, &error.to_string());
    }

    ExitStatus::Failure
}
