// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words tcgetattr tcsetattr perror

//! Error taxonomy. Every error here is fatal: a half configured terminal or an unknown
//! viewport size leaves the renderer with nothing sensible to draw.
//!
//! | Error                   | Cause                                                  |
//! | :---------------------- | :----------------------------------------------------- |
//! | [`TerminalControlError`] | Reading or writing terminal attributes failed          |
//! | [`GeometryQueryError`]   | Window size query failed, or reported a zero dimension |
//! | [`DeviceReadError`]      | Reading input failed for a reason other than a timeout |
//!
//! The [`std::fmt::Display`] form of each error is the one line diagnostic printed on
//! the way out: `<operation>: <operating system error text>`.

use miette::Diagnostic;
use std::{fmt::{Display, Formatter},
          io};

/// Which terminal attribute call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalOperation {
    ReadAttributes,
    WriteAttributes,
}

impl Display for TerminalOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalOperation::ReadAttributes => write!(f, "tcgetattr"),
            TerminalOperation::WriteAttributes => write!(f, "tcsetattr"),
        }
    }
}

/// Reading or applying terminal attributes failed.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{operation}: {source}")]
#[diagnostic(
    code(r3bl_kilo::terminal::control),
    help("Make sure standard input is attached to an interactive terminal")
)]
pub struct TerminalControlError {
    pub operation: TerminalOperation,
    #[source]
    pub source: io::Error,
}

impl TerminalControlError {
    #[must_use]
    pub fn read_attributes(source: io::Error) -> Self {
        Self {
            operation: TerminalOperation::ReadAttributes,
            source,
        }
    }

    #[must_use]
    pub fn write_attributes(source: io::Error) -> Self {
        Self {
            operation: TerminalOperation::WriteAttributes,
            source,
        }
    }
}

/// The viewport size could not be determined.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum GeometryQueryError {
    #[error("getWindowSize: {0}")]
    #[diagnostic(code(r3bl_kilo::geometry::query))]
    Query(#[source] io::Error),

    #[error("getWindowSize: terminal reported {cols} columns and {rows} rows")]
    #[diagnostic(
        code(r3bl_kilo::geometry::degenerate_size),
        help("A zero width or zero height terminal is treated as a failed query")
    )]
    DegenerateSize { rows: u16, cols: u16 },
}

/// Reading from the terminal failed (a timeout is not a failure).
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("read: {0}")]
#[diagnostic(code(r3bl_kilo::input::read))]
pub struct DeviceReadError(#[source] pub io::Error);

/// Umbrella for everything that can end the editor with a non-zero exit status.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum KiloError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    TerminalControl(#[from] TerminalControlError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    GeometryQuery(#[from] GeometryQueryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    DeviceRead(#[from] DeviceReadError),
}
