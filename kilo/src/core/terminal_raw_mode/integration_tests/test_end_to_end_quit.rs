// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Runs the whole editor on a PTY: the master waits for the first frame, types `AB`
//! and then `Ctrl+Q`, and the slave checks the exit status and the restored terminal.

use crate::{EditorConfig, ExitStatus, OutputDevice, TtyDevice, generate_pty_test,
            read_slave_report, run_app, slave_fail, slave_succeed};
use rustix::termios;
use std::{io::{BufReader, Write},
          time::Duration};

generate_pty_test! {
    test_fn: test_end_to_end_quit,
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
    let mut writer = pty_pair.master.take_writer().expect("Failed to get writer");
    let mut buf_reader = BufReader::new(reader);

    let mut keys_sent = false;
    let report = read_slave_report(&mut buf_reader, Duration::from_secs(10), |line| {
        if !keys_sent && line.contains('~') {
            writer.write_all(b"AB\x11").expect("Failed to write keys");
            writer.flush().expect("Failed to flush keys");
            keys_sent = true;
        }
    });

    assert!(report.slave_started, "Slave did not start properly");
    assert!(keys_sent, "No frame was rendered");
    assert!(report.failure.is_none(), "Test failed: {:?}", report.failure);
    assert!(report.success.is_some(), "Test did not report success");
    assert!(
        report.lines.iter().filter(|line| line.contains('~')).count() >= 24,
        "Expected at least one full frame of 24 rows"
    );

    child.wait().expect("Failed to wait for slave");
}

fn pty_slave_entry_point() -> ! {
    let stdin = std::io::stdin();
    let before = termios::tcgetattr(&stdin).unwrap_or_else(|e| slave_fail(&e.to_string()));

    let device = TtyDevice::open().unwrap_or_else(|e| slave_fail(&format!("open: {e}")));
    let output_device = OutputDevice::new_stdout();
    let diagnostics_device = OutputDevice::new_stderr();

    let exit_status = run_app(
        device,
        &output_device,
        &diagnostics_device,
        &EditorConfig::default(),
    );

    let after = termios::tcgetattr(&stdin).unwrap_or_else(|e| slave_fail(&e.to_string()));

    if exit_status != ExitStatus::Success {
        slave_fail(&format!("exit status {exit_status:?}"));
    }
    if before.local_modes != after.local_modes || before.input_modes != after.input_modes {
        slave_fail("terminal not restored after quit");
    }

    // Start on a fresh line; the quit path leaves the cursor at home after clearing.
    println!();
    slave_succeed("quit with Ctrl+Q and restored the terminal");
}
