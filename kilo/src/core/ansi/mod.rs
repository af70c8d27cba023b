// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod constants;
pub mod terminal_output;

// Re-export.
pub use constants::*;
pub use terminal_output::*;
