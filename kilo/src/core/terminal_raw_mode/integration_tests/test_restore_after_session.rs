// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The attributes after a session ends match the ones before it started, both for an
//! explicit restore and for a session that is only dropped.

use crate::{TerminalSession, TtyDevice, generate_pty_test, read_slave_report, slave_fail,
            slave_succeed};
use rustix::termios::{self, SpecialCodeIndex, Termios};
use std::{io::BufReader, time::Duration};

generate_pty_test! {
    test_fn: test_restore_after_session,
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

/// Compares everything raw mode touches.
fn same_modes(lhs: &Termios, rhs: &Termios) -> bool {
    lhs.input_modes == rhs.input_modes
        && lhs.output_modes == rhs.output_modes
        && lhs.control_modes == rhs.control_modes
        && lhs.local_modes == rhs.local_modes
        && lhs.special_codes[SpecialCodeIndex::VMIN]
            == rhs.special_codes[SpecialCodeIndex::VMIN]
        && lhs.special_codes[SpecialCodeIndex::VTIME]
            == rhs.special_codes[SpecialCodeIndex::VTIME]
}

fn current_attributes() -> Termios {
    termios::tcgetattr(std::io::stdin()).unwrap_or_else(|e| slave_fail(&e.to_string()))
}

fn pty_slave_entry_point() -> ! {
    let before = current_attributes();

    // Explicit restore.
    let device = TtyDevice::open().unwrap_or_else(|e| slave_fail(&format!("open: {e}")));
    let session =
        TerminalSession::enable(device).unwrap_or_else(|e| slave_fail(&e.to_string()));
    if same_modes(&before, &current_attributes()) {
        slave_fail("raw mode did not change the attributes");
    }
    if let Err(e) = session.restore() {
        slave_fail(&e.to_string());
    }
    if !same_modes(&before, &current_attributes()) {
        slave_fail("attributes differ after restore");
    }

    // Restore on drop.
    {
        let device =
            TtyDevice::open().unwrap_or_else(|e| slave_fail(&format!("open: {e}")));
        let _session =
            TerminalSession::enable(device).unwrap_or_else(|e| slave_fail(&e.to_string()));
    }
    if !same_modes(&before, &current_attributes()) {
        slave_fail("attributes differ after drop");
    }

    slave_succeed("attributes restored after restore and after drop");
}
