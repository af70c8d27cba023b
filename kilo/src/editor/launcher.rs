// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CLIArg, EditorConfig, ExitStatus, OutputDevice, TerminalControlError,
            TtyDevice, clear_screen_and_home_cursor, report_fatal_errors, run_app,
            try_initialize_logging_global, write_line};

/// Entry point used by the `kilo` binary: set up logging, open the controlling
/// terminal, and run the editor on it with stdout for frames and stderr for
/// diagnostics.
#[must_use]
pub fn run_kilo(cli_arg: &CLIArg) -> ExitStatus {
    let output_device = OutputDevice::new_stdout();
    let diagnostics_device = OutputDevice::new_stderr();

    // Logging is optional; a log file that can't be created doesn't stop the editor.
    let tracing_config = cli_arg.global_options.tracing_config();
    if let Err(error) = try_initialize_logging_global(&tracing_config) {
        write_line(&diagnostics_device, &format!("logging disabled: {error}"));
    }

    tracing::debug!(message = "run_kilo -> start", cli_arg = ?cli_arg);

    let device = match TtyDevice::open() {
        Ok(device) => device,
        Err(error) => {
            clear_screen_and_home_cursor(&output_device);
            return report_fatal_errors(
                &diagnostics_device,
                &[TerminalControlError::read_attributes(error).into()],
            );
        }
    };

    tracing::debug!(
        message = "run_kilo -> terminal opened",
        dev_tty_fallback = device.is_dev_tty_fallback(),
    );

    let exit_status = run_app(
        device,
        &output_device,
        &diagnostics_device,
        &EditorConfig::default(),
    );

    tracing::debug!(message = "run_kilo -> exit", exit_status = ?exit_status);
    exit_status
}
