// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios tcgetattr tcsetattr icanon isig iexten brkint icrnl inpck istrip
// cspell:words opost vmin vtime tcsaflush cfmakeraw

//! Terminal raw mode for the editor.
//!
//! ## Raw Mode vs Cooked Mode
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - Special characters are interpreted (Ctrl+C, Ctrl+Z, Ctrl+S, Ctrl+Q, Ctrl+V)
//! - Echoing is enabled (typed characters appear on screen)
//! - Output `\n` is expanded to `\r\n`
//!
//! **Raw Mode**:
//! - No line buffering - bytes available immediately
//! - No special character processing - all bytes pass through
//! - No echo - typed characters don't automatically appear
//! - No output post-processing - the renderer writes `\r\n` itself
//!
//! ## The transformation
//!
//! Raw mode is derived from the attributes captured *before* anything was changed, and
//! only from those. [`TerminalModeOptions::into_raw()`] is a pure function:
//!
//! | Group   | Option                    | termios flag | Raw value |
//! | :------ | :------------------------ | :----------- | :-------- |
//! | input   | `break_interrupts`        | `BRKINT`     | off       |
//! | input   | `translate_cr_to_nl`      | `ICRNL`      | off       |
//! | input   | `parity_check`            | `INPCK`      | off       |
//! | input   | `strip_high_bit`          | `ISTRIP`     | off       |
//! | input   | `software_flow_control`   | `IXON`       | off       |
//! | output  | `output_post_processing`  | `OPOST`      | off       |
//! | control | `char_size`               | `CSIZE`      | `CS8`     |
//! | local   | `echo`                    | `ECHO`       | off       |
//! | local   | `canonical`               | `ICANON`     | off       |
//! | local   | `signals`                 | `ISIG`       | off       |
//! | local   | `extended_input`          | `IEXTEN`     | off       |
//! | cc      | `read_granularity`        | `VMIN/VTIME` | `0 / 1`   |
//!
//! With `VMIN=0, VTIME=1` a `read()` returns as soon as a byte is available, or after
//! a tenth of a second with zero bytes. That zero byte result is a timeout, not an
//! error.
//!
//! The bitmask representation only exists in [`raw_mode_unix`], at the boundary with
//! the OS. Everything else works with named options.
//!
//! ## Usage Example
//!
//! ```no_run
//! use r3bl_kilo::{TerminalSession, TtyDevice};
//!
//! let device = TtyDevice::open().expect("no terminal");
//! let session = TerminalSession::enable(device).expect("failed to enable raw mode");
//! // ... read bytes, render frames ...
//! session.restore().expect("failed to restore terminal");
//! ```
//!
//! If `restore()` is never reached (early return, `?`, panic), dropping the session
//! restores the saved attributes.
//!
//! ## The `stty` Command
//!
//! `stty -a` shows the same flags this module manipulates. If a crash ever leaves the
//! terminal in raw mode, `stty sane` (typed blind, followed by Ctrl+J) brings it back.

// Attach sources.
pub mod mode_options;
pub mod raw_mode_core;

#[cfg(unix)]
pub mod raw_mode_unix;

// Re-export the public API (flat, ergonomic surface).
pub use mode_options::*;
pub use raw_mode_core::*;

// Automated PTY integration tests (Unix only).
#[cfg(all(unix, test))]
mod integration_tests;
