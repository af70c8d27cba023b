// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CharSize, ReadGranularity, TerminalAttributes, TerminalDevice,
            TerminalModeOptions, WindowSize};
use std::{cell::RefCell, collections::VecDeque, io, rc::Rc};

/// Attribute set for [`MockTerminalDevice`]. `opaque` stands in for everything in a
/// real `termios` that raw mode doesn't touch (speeds, other flags).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockAttributes {
    pub options: TerminalModeOptions,
    pub opaque: u64,
}

impl Default for MockAttributes {
    /// A typical cooked terminal.
    fn default() -> Self {
        Self {
            options: TerminalModeOptions {
                break_interrupts: true,
                translate_cr_to_nl: true,
                parity_check: false,
                strip_high_bit: false,
                software_flow_control: true,
                output_post_processing: true,
                char_size: CharSize::Eight,
                echo: true,
                canonical: true,
                signals: true,
                extended_input: true,
                read_granularity: ReadGranularity {
                    min_bytes: 1,
                    timeout_deciseconds: 0,
                },
            },
            opaque: 0xB9600,
        }
    }
}

impl TerminalAttributes for MockAttributes {
    fn mode_options(&self) -> TerminalModeOptions { self.options }

    fn with_mode_options(&self, options: &TerminalModeOptions) -> Self {
        Self {
            options: *options,
            opaque: self.opaque,
        }
    }
}

/// One scripted result for [`TerminalDevice::read_byte()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockRead {
    Byte(u8),
    Timeout,
    Error(io::ErrorKind),
}

#[derive(Debug)]
struct MockState {
    attributes: MockAttributes,
    attribute_writes: Vec<MockAttributes>,
    reads: VecDeque<MockRead>,
    bytes_consumed: usize,
    window_size: Result<WindowSize, io::ErrorKind>,
    fail_attribute_read: bool,
    /// Attribute writes with this index or higher fail.
    fail_attribute_writes_from: Option<usize>,
}

/// Scripted stand-in for a TTY. Clones share state, so a test can hand one clone to
/// the code under test and inspect the device through another.
///
/// Once the scripted reads run out, further reads fail with
/// [`io::ErrorKind::UnexpectedEof`], so a test that forgets to script a quit key ends
/// instead of spinning forever.
#[derive(Debug, Clone)]
pub struct MockTerminalDevice {
    state: Rc<RefCell<MockState>>,
}

impl Default for MockTerminalDevice {
    fn default() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState {
                attributes: MockAttributes::default(),
                attribute_writes: vec![],
                reads: VecDeque::new(),
                bytes_consumed: 0,
                window_size: Ok(WindowSize { rows: 24, cols: 80 }),
                fail_attribute_read: false,
                fail_attribute_writes_from: None,
            })),
        }
    }
}

impl MockTerminalDevice {
    #[must_use]
    pub fn with_reads(self, reads: impl IntoIterator<Item = MockRead>) -> Self {
        self.state.borrow_mut().reads.extend(reads);
        self
    }

    #[must_use]
    pub fn with_input_bytes(self, bytes: &[u8]) -> Self {
        self.with_reads(bytes.iter().copied().map(MockRead::Byte))
    }

    #[must_use]
    pub fn with_window_size(self, window_size: Result<WindowSize, io::ErrorKind>) -> Self {
        self.state.borrow_mut().window_size = window_size;
        self
    }

    #[must_use]
    pub fn with_failing_attribute_read(self) -> Self {
        self.state.borrow_mut().fail_attribute_read = true;
        self
    }

    /// Every attribute write fails, so raw mode can't be entered.
    #[must_use]
    pub fn with_failing_attribute_write(self) -> Self {
        self.state.borrow_mut().fail_attribute_writes_from = Some(0);
        self
    }

    /// Entering raw mode works, restoring fails.
    #[must_use]
    pub fn with_failing_restore(self) -> Self {
        self.state.borrow_mut().fail_attribute_writes_from = Some(1);
        self
    }

    pub fn current_attributes(&self) -> MockAttributes {
        self.state.borrow().attributes.clone()
    }

    /// Every attribute set that was applied successfully, in order.
    pub fn attribute_writes(&self) -> Vec<MockAttributes> {
        self.state.borrow().attribute_writes.clone()
    }

    pub fn bytes_consumed(&self) -> usize { self.state.borrow().bytes_consumed }

    pub fn remaining_reads(&self) -> usize { self.state.borrow().reads.len() }
}

impl TerminalDevice for MockTerminalDevice {
    type Attributes = MockAttributes;

    fn read_attributes(&self) -> io::Result<MockAttributes> {
        let state = self.state.borrow();
        if state.fail_attribute_read {
            return Err(io::Error::new(io::ErrorKind::NotFound, "not a terminal"));
        }
        Ok(state.attributes.clone())
    }

    fn write_attributes(&self, attributes: &MockAttributes) -> io::Result<()> {
        let mut state = self.state.borrow_mut();
        let attempt = state.attribute_writes.len();
        if state
            .fail_attribute_writes_from
            .is_some_and(|from| attempt >= from)
        {
            return Err(io::Error::other("input/output error"));
        }
        state.attributes = attributes.clone();
        state.attribute_writes.push(attributes.clone());
        Ok(())
    }

    fn read_byte(&self) -> io::Result<Option<u8>> {
        let mut state = self.state.borrow_mut();
        match state.reads.pop_front() {
            Some(MockRead::Byte(byte)) => {
                state.bytes_consumed += 1;
                Ok(Some(byte))
            }
            Some(MockRead::Timeout) => Ok(None),
            Some(MockRead::Error(kind)) => Err(io::Error::from(kind)),
            None => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "mock input exhausted",
            )),
        }
    }

    fn window_size(&self) -> io::Result<WindowSize> {
        self.state.borrow().window_size.map_err(io::Error::from)
    }
}
