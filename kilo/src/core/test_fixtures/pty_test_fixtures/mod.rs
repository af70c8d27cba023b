// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#[cfg(unix)]
pub mod read_pty_lines;

// Re-export.
#[cfg(unix)]
pub use read_pty_lines::*;
