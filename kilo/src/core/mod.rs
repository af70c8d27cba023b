// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ansi;
pub mod error;
pub mod geometry;
pub mod log;
pub mod terminal_io;
pub mod terminal_raw_mode;

#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use ansi::*;
pub use error::*;
pub use geometry::*;
pub use log::*;
pub use terminal_io::*;
pub use terminal_raw_mode::*;

#[cfg(test)]
pub use test_fixtures::*;
