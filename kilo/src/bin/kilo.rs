// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use r3bl_kilo::CLIArg;
use std::process::ExitCode;

#[cfg(unix)]
fn main() -> ExitCode {
    let cli_arg = CLIArg::parse();
    r3bl_kilo::run_kilo(&cli_arg).into()
}

#[cfg(not(unix))]
fn main() -> ExitCode {
    let _unused = CLIArg::parse();
    eprintln!("kilo: raw mode needs a Unix terminal");
    ExitCode::FAILURE
}
