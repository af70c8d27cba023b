// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::TracingConfig;
use clap::{Args, Parser};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "kilo")]
#[command(about = "Raw mode terminal viewport. Press Ctrl+Q to quit.")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nUSAGE:\n  kilo [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file (`log.txt` unless --log-file is given) for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "PATH",
        requires = "enable_logging",
        help = "Path of the log file. Only used with --enable-logging."
    )]
    pub log_file: Option<String>,
}

impl GlobalOption {
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        if self.enable_logging {
            TracingConfig::new_file(self.log_file.clone())
        } else {
            TracingConfig::new_disabled()
        }
    }
}
