// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{BufRead, ErrorKind},
          time::{Duration, Instant}};

/// What the master saw on the slave's side of the PTY.
#[derive(Debug, Default)]
pub struct SlaveReport {
    pub lines: Vec<String>,
    pub slave_started: bool,
    pub success: Option<String>,
    pub failure: Option<String>,
}

/// Read lines written by the slave until it reports `SUCCESS:` or `FAILED:`, the
/// stream ends, or `timeout` elapses. Every line (trimmed) is passed to `on_line`
/// first, so the master can react to output (eg: send keystrokes once a frame shows
/// up).
///
/// # Panics
///
/// Panics on a read error other than [`ErrorKind::WouldBlock`].
pub fn read_slave_report(
    reader: &mut impl BufRead,
    timeout: Duration,
    mut on_line: impl FnMut(&str),
) -> SlaveReport {
    let mut report = SlaveReport::default();
    let start = Instant::now();

    while start.elapsed() < timeout {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let trimmed = line.trim();
                eprintln!("  ← Slave output: {trimmed}");
                on_line(trimmed);

                if trimmed.contains("SLAVE_STARTING") {
                    report.slave_started = true;
                }
                if trimmed.contains("SUCCESS:") {
                    report.success = Some(trimmed.to_string());
                }
                if trimmed.contains("FAILED:") {
                    report.failure = Some(trimmed.to_string());
                }
                report.lines.push(trimmed.to_string());

                if report.success.is_some() || report.failure.is_some() {
                    break;
                }
            }
            Err(e) if e.kind() == ErrorKind::WouldBlock => {
                std::thread::sleep(Duration::from_millis(10));
            }
            Err(e) => panic!("Read error: {e}"),
        }
    }

    report
}

/// Print `FAILED: <reason>` for the master and exit the slave process.
pub fn slave_fail(reason: &str) -> ! {
    use std::io::Write;
    println!("FAILED: {reason}");
    std::io::stdout().flush().expect("Failed to flush");
    std::process::exit(1);
}

/// Print `SUCCESS: <message>` for the master and exit the slave process.
pub fn slave_succeed(message: &str) -> ! {
    use std::io::Write;
    println!("SUCCESS: {message}");
    std::io::stdout().flush().expect("Failed to flush");
    std::process::exit(0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_slave_report_stops_at_success() {
        let mut input = Cursor::new("SLAVE_STARTING\r\nnoise\r\nSUCCESS: ok\r\nafter\r\n");
        let mut seen = vec![];

        let report = read_slave_report(&mut input, Duration::from_secs(1), |line| {
            seen.push(line.to_string());
        });

        assert!(report.slave_started);
        assert_eq!(report.success.as_deref(), Some("SUCCESS: ok"));
        assert!(report.failure.is_none());
        assert_eq!(seen, vec!["SLAVE_STARTING", "noise", "SUCCESS: ok"]);
    }

    #[test]
    fn test_read_slave_report_captures_failure() {
        let mut input = Cursor::new("FAILED: ECHO not disabled\n");
        let report = read_slave_report(&mut input, Duration::from_secs(1), |_| {});
        assert_eq!(report.failure.as_deref(), Some("FAILED: ECHO not disabled"));
    }
}
