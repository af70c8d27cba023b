// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words BRKINT ICRNL INPCK ISTRIP IXON OPOST ICANON ISIG IEXTEN VMIN VTIME

//! Checks each flag raw mode is supposed to change, not just that something changed.

use crate::{TerminalSession, TtyDevice, VMIN_RAW_MODE, VTIME_RAW_MODE, generate_pty_test,
            read_slave_report, slave_fail, slave_succeed};
use rustix::termios::{self, ControlModes, InputModes, LocalModes, OutputModes,
                      SpecialCodeIndex};
use std::{io::BufReader, time::Duration};

generate_pty_test! {
    /// Input: BRKINT ICRNL INPCK ISTRIP IXON off. Output: OPOST off. Control: CS8.
    /// Local: ECHO ICANON ISIG IEXTEN off. VMIN and VTIME give a 100ms read timeout.
    test_fn: test_raw_mode_flags,
    master: pty_master_entry_point,
    slave: pty_slave_entry_point
}

fn pty_master_entry_point(
    pty_pair: portable_pty::PtyPair,
    mut child: Box<dyn portable_pty::Child + Send + Sync>,
) {
    let reader = pty_pair
        .master
        .try_clone_reader()
        .expect("Failed to get reader");
    let mut buf_reader = BufReader::new(reader);

    let report = read_slave_report(&mut buf_reader, Duration::from_secs(5), |_| {});

    assert!(report.slave_started, "Slave did not start properly");
    assert!(report.failure.is_none(), "Test failed: {:?}", report.failure);
    assert!(report.success.is_some(), "Test did not report success");

    child.wait().expect("Failed to wait for slave");
}

fn pty_slave_entry_point() -> ! {
    let device = TtyDevice::open().unwrap_or_else(|e| slave_fail(&format!("open: {e}")));
    let session =
        TerminalSession::enable(device).unwrap_or_else(|e| slave_fail(&e.to_string()));

    let stdin = std::io::stdin();
    let raw = termios::tcgetattr(&stdin).unwrap_or_else(|e| slave_fail(&e.to_string()));

    let mut problems = vec![];

    for (flag, name) in [
        (InputModes::BRKINT, "BRKINT"),
        (InputModes::ICRNL, "ICRNL"),
        (InputModes::INPCK, "INPCK"),
        (InputModes::ISTRIP, "ISTRIP"),
        (InputModes::IXON, "IXON"),
    ] {
        if raw.input_modes.contains(flag) {
            problems.push(name);
        }
    }

    if raw.output_modes.contains(OutputModes::OPOST) {
        problems.push("OPOST");
    }

    if raw.control_modes & ControlModes::CSIZE != ControlModes::CS8 {
        problems.push("CS8");
    }

    for (flag, name) in [
        (LocalModes::ECHO, "ECHO"),
        (LocalModes::ICANON, "ICANON"),
        (LocalModes::ISIG, "ISIG"),
        (LocalModes::IEXTEN, "IEXTEN"),
    ] {
        if raw.local_modes.contains(flag) {
            problems.push(name);
        }
    }

    if raw.special_codes[SpecialCodeIndex::VMIN] != VMIN_RAW_MODE {
        problems.push("VMIN");
    }
    if raw.special_codes[SpecialCodeIndex::VTIME] != VTIME_RAW_MODE {
        problems.push("VTIME");
    }

    if let Err(e) = session.restore() {
        slave_fail(&e.to_string());
    }

    if problems.is_empty() {
        slave_succeed("raw mode flags are correct");
    } else {
        slave_fail(&format!("wrong flags: {}", problems.join(", ")));
    }
}
