// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raw mode tests against a real PTY. Each test spawns the test binary again as the
//! slave process (see [`crate::generate_pty_test`]) so the slave's stdin and stdout
//! are the PTY, then checks what it reports.
//!
//! Skipped in CI. Run with:
//!
//! ```bash
//! cargo test -p r3bl_kilo --lib integration_tests -- --nocapture
//! ```

mod test_end_to_end_quit;
mod test_flag_verification;
mod test_restore_after_session;
