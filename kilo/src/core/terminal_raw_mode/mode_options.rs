// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words vmin vtime

use std::fmt::Debug;

/// `VMIN` in raw mode: `read()` may return with zero bytes.
pub const VMIN_RAW_MODE: u8 = 0;

/// `VTIME` in raw mode, in tenths of a second: give up waiting after 100ms.
pub const VTIME_RAW_MODE: u8 = 1;

/// Character size (`CSIZE` field of the control modes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharSize {
    Five,
    Six,
    Seven,
    Eight,
}

/// How long a single `read()` waits, and for how many bytes (`VMIN` / `VTIME`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadGranularity {
    pub min_bytes: u8,
    pub timeout_deciseconds: u8,
}

impl ReadGranularity {
    /// Return as soon as any input is available, otherwise time out after 100ms.
    pub const RAW: Self = Self {
        min_bytes: VMIN_RAW_MODE,
        timeout_deciseconds: VTIME_RAW_MODE,
    };
}

/// The subset of a terminal's attributes that raw mode cares about, as named options
/// instead of bitmasks. See the [module docs] for the termios flag behind each one.
///
/// [module docs]: mod@crate::core::terminal_raw_mode
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalModeOptions {
    // Input side.
    pub break_interrupts: bool,
    pub translate_cr_to_nl: bool,
    pub parity_check: bool,
    pub strip_high_bit: bool,
    pub software_flow_control: bool,
    // Output side.
    pub output_post_processing: bool,
    // Control.
    pub char_size: CharSize,
    // Local.
    pub echo: bool,
    pub canonical: bool,
    pub signals: bool,
    pub extended_input: bool,
    // Control characters.
    pub read_granularity: ReadGranularity,
}

impl TerminalModeOptions {
    /// The raw mode variant of these options. Every field it touches is set to a
    /// constant, so the result depends on nothing but `self`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn into_raw(self) -> Self {
        Self {
            break_interrupts: false,
            translate_cr_to_nl: false,
            parity_check: false,
            strip_high_bit: false,
            software_flow_control: false,
            output_post_processing: false,
            char_size: CharSize::Eight,
            echo: false,
            canonical: false,
            signals: false,
            extended_input: false,
            read_granularity: ReadGranularity::RAW,
        }
    }
}

/// An opaque terminal attribute set (eg: `termios`) that can expose and accept
/// [`TerminalModeOptions`]. Fields that are not covered by the options (baud rate,
/// other flags, other control characters) pass through untouched.
pub trait TerminalAttributes: Clone + Debug {
    /// Read the named options out of this attribute set.
    fn mode_options(&self) -> TerminalModeOptions;

    /// A copy of this attribute set with `options` applied.
    #[must_use]
    fn with_mode_options(&self, options: &TerminalModeOptions) -> Self;
}

/// Derive the raw mode attribute set from the saved one. This is a pure function of
/// `saved`; it never looks at any previous raw state.
#[must_use]
pub fn derive_raw_attributes<A: TerminalAttributes>(saved: &A) -> A {
    saved.with_mode_options(&saved.mode_options().into_raw())
}
