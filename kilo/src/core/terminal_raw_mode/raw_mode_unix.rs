// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words termios brkint icrnl inpck istrip ixon opost csize icanon isig iexten
// cspell:words vmin vtime

//! The only place where [`TerminalModeOptions`] meet termios bitmasks.

use crate::{CharSize, ReadGranularity, TerminalAttributes, TerminalModeOptions};
use rustix::termios::{ControlModes, InputModes, LocalModes, OutputModes,
                      SpecialCodeIndex, Termios};

impl TerminalAttributes for Termios {
    fn mode_options(&self) -> TerminalModeOptions {
        let input = self.input_modes;
        let local = self.local_modes;
        TerminalModeOptions {
            break_interrupts: input.contains(InputModes::BRKINT),
            translate_cr_to_nl: input.contains(InputModes::ICRNL),
            parity_check: input.contains(InputModes::INPCK),
            strip_high_bit: input.contains(InputModes::ISTRIP),
            software_flow_control: input.contains(InputModes::IXON),
            output_post_processing: self.output_modes.contains(OutputModes::OPOST),
            char_size: char_size_from(self.control_modes),
            echo: local.contains(LocalModes::ECHO),
            canonical: local.contains(LocalModes::ICANON),
            signals: local.contains(LocalModes::ISIG),
            extended_input: local.contains(LocalModes::IEXTEN),
            read_granularity: ReadGranularity {
                min_bytes: self.special_codes[SpecialCodeIndex::VMIN],
                timeout_deciseconds: self.special_codes[SpecialCodeIndex::VTIME],
            },
        }
    }

    fn with_mode_options(&self, options: &TerminalModeOptions) -> Self {
        let mut it = self.clone();

        it.input_modes.set(InputModes::BRKINT, options.break_interrupts);
        it.input_modes.set(InputModes::ICRNL, options.translate_cr_to_nl);
        it.input_modes.set(InputModes::INPCK, options.parity_check);
        it.input_modes.set(InputModes::ISTRIP, options.strip_high_bit);
        it.input_modes.set(InputModes::IXON, options.software_flow_control);

        it.output_modes
            .set(OutputModes::OPOST, options.output_post_processing);

        it.control_modes.remove(ControlModes::CSIZE);
        it.control_modes.insert(char_size_to(options.char_size));

        it.local_modes.set(LocalModes::ECHO, options.echo);
        it.local_modes.set(LocalModes::ICANON, options.canonical);
        it.local_modes.set(LocalModes::ISIG, options.signals);
        it.local_modes.set(LocalModes::IEXTEN, options.extended_input);

        it.special_codes[SpecialCodeIndex::VMIN] = options.read_granularity.min_bytes;
        it.special_codes[SpecialCodeIndex::VTIME] =
            options.read_granularity.timeout_deciseconds;

        it
    }
}

fn char_size_from(control_modes: ControlModes) -> CharSize {
    let size = control_modes & ControlModes::CSIZE;
    if size == ControlModes::CS5 {
        CharSize::Five
    } else if size == ControlModes::CS6 {
        CharSize::Six
    } else if size == ControlModes::CS7 {
        CharSize::Seven
    } else {
        CharSize::Eight
    }
}

fn char_size_to(char_size: CharSize) -> ControlModes {
    match char_size {
        CharSize::Five => ControlModes::CS5,
        CharSize::Six => ControlModes::CS6,
        CharSize::Seven => ControlModes::CS7,
        CharSize::Eight => ControlModes::CS8,
    }
}
