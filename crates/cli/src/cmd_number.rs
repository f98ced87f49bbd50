// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Number command implementation.

use anyhow::Context;
use serde_json::Value;

use sigmatch::cli::NumberArgs;
use sigmatch::error::ExitCode;
use sigmatch::evaluate::evaluate_numbers;
use sigmatch::pattern::NumberMatcher;

use crate::cmd_output;

/// Run the number command.
pub fn run(args: &NumberArgs) -> anyhow::Result<ExitCode> {
    let matcher = if args.json {
        let value: Value =
            serde_json::from_str(&args.matcher).context("MATCHER is not valid JSON")?;
        NumberMatcher::from_json(&value)?
    } else {
        NumberMatcher::from_text(&args.matcher)?
    };

    let observed = cmd_output::observations(&args.observed)?;
    let outcomes = evaluate_numbers(&matcher, &observed)?;
    cmd_output::report(&args.display, &matcher, &outcomes)
}
