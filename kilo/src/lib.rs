// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios tcgetattr tcsetattr

//! # `r3bl_kilo`
//!
//! The foundation layer of a terminal text editor. It does three things:
//!
//! 1. Puts the controlling terminal into raw mode (byte-at-a-time, unechoed, no
//!    translation) using the POSIX termios API via [`rustix`], and guarantees that the
//!    original attributes are written back on every exit path. See
//!    [`TerminalSession`].
//! 2. Renders a full-screen frame for an empty document using two ANSI control
//!    sequences (`ESC [ 2 J` and `ESC [ H`). See [`refresh_screen`].
//! 3. Reads one input byte at a time and maps it to an editor command (currently only
//!    quit, on `Ctrl+Q`). See [`process_keypress`].
//!
//! The process glue lives in [`run_app`], which the `kilo` binary calls.
//!
//! ```text
//! run_app
//!  ├── TerminalSession::enable(device)   Uninitialized ──▶ Raw
//!  ├── loop
//!  │    ├── refresh_screen(geometry)
//!  │    └── process_keypress()           Ctrl+Q ──▶ stop
//!  └── TerminalSession::restore()        Raw ──▶ Restored
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod editor;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use crate::core::*;
pub use editor::*;
