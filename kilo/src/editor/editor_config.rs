// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// The byte a terminal sends for `Ctrl+<letter>`: the letter with its top three bits
/// cleared. Works for upper and lower case alike.
#[must_use]
pub const fn ctrl_key(letter: u8) -> u8 { letter & 0x1F }

/// `Ctrl+Q`.
pub const DEFAULT_QUIT_KEY: u8 = ctrl_key(b'q');

/// Drawn at the start of every row that has no document content.
pub const DEFAULT_PLACEHOLDER: u8 = b'~';

/// Editor behavior that isn't part of the terminal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    /// Input byte that quits the editor.
    pub quit_key: u8,
    /// Line start marker for empty rows.
    pub placeholder: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            quit_key: DEFAULT_QUIT_KEY,
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(b'q', 17)]
    #[test_case(b'Q', 17)]
    #[test_case(b'a', 1)]
    #[test_case(b'z', 26)]
    fn test_ctrl_key(letter: u8, expected: u8) {
        assert_eq!(ctrl_key(letter), expected);
    }

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.quit_key, 17);
        assert_eq!(config.placeholder, b'~');
    }
}
