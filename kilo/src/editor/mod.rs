// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Enable or disable debug logging for the editor module.
pub const DEBUG_KILO_MOD: bool = true;

// Attach sources.
pub mod clap_config;
pub mod editor_config;
pub mod editor_main;
pub mod input_dispatcher;
#[cfg(unix)]
pub mod launcher;
pub mod screen_renderer;

// Re-export.
pub use clap_config::*;
pub use editor_config::*;
pub use editor_main::*;
pub use input_dispatcher::*;
#[cfg(unix)]
pub use launcher::*;
pub use screen_renderer::*;
