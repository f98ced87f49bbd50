// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared input and output handling for the match commands.

use std::fmt::Display;
use std::io::BufRead;

use anyhow::Context;
use termcolor::StandardStream;

use sigmatch::cli::{DisplayArgs, OutputFormat};
use sigmatch::error::ExitCode;
use sigmatch::evaluate::{Outcome, count_matched};
use sigmatch::output::json::JsonOutput;
use sigmatch::output::text::TextFormatter;

/// Observations from the command line, or stdin lines when none were given.
pub fn observations(args: &[String]) -> anyhow::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }
    let lines = std::io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .context("failed to read observations from stdin")?;
    tracing::debug!(count = lines.len(), "read observations from stdin");
    Ok(lines)
}

/// Write outcomes in the requested format and pick the exit code.
pub fn report(
    display: &DisplayArgs,
    matcher: &impl Display,
    outcomes: &[Outcome],
) -> anyhow::Result<ExitCode> {
    match display.output {
        OutputFormat::Text => {
            let stdout = StandardStream::stdout(display.color_choice());
            let mut formatter = TextFormatter::new(stdout.lock(), display.all);
            formatter.write_outcomes(outcomes)?;
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            JsonOutput::new(matcher, outcomes).write(stdout.lock())?;
        }
    }

    if count_matched(outcomes) > 0 {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::NoMatch)
    }
}
