// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The control sequences the editor emits. These are plain VT100 sequences, written
//! directly to the output device without a terminal library in between.

/// `ESC [ 2 J` (ED 2): Erase in Display, entire screen. Does not move the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// `ESC [ H` (CUP with no parameters): move the cursor to row 1, column 1.
pub const CURSOR_HOME: &str = "\x1b[H";

/// Explicit line terminator. With output post-processing off the terminal no longer
/// turns `\n` into `\r\n`, so the carriage return has to be sent by us.
pub const CRLF: &str = "\r\n";
