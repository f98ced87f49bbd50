// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sigmatch CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use sigmatch::cli::{Cli, Command};
use sigmatch::error::ExitCode;

mod cmd_number;
mod cmd_output;
mod cmd_text;

fn init_logging() {
    let filter = sigmatch::env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives.to_string_lossy()).ok())
        .unwrap_or_else(|| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("sigmatch: {:#}", e);
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Text(args)) => cmd_text::run(args),
        Some(Command::Number(args)) => cmd_number::run(args),
    }
}

fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    if let Some(err) = err.downcast_ref::<sigmatch::Error>() {
        ExitCode::from(err)
    } else if err.downcast_ref::<serde_json::Error>().is_some() {
        // --json matcher that is not valid JSON
        ExitCode::ConfigError
    } else {
        ExitCode::InternalError
    }
}
