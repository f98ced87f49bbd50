// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text command implementation.

use anyhow::Context;
use serde_json::Value;

use sigmatch::cli::TextArgs;
use sigmatch::error::ExitCode;
use sigmatch::evaluate::evaluate_text;
use sigmatch::pattern::TextMatcher;

use crate::cmd_output;

/// Run the text command.
pub fn run(args: &TextArgs) -> anyhow::Result<ExitCode> {
    let matcher = if args.json {
        let value: Value =
            serde_json::from_str(&args.matcher).context("MATCHER is not valid JSON")?;
        TextMatcher::from_json(&value)?
    } else {
        TextMatcher::from_compact(&args.matcher)?
    };

    let candidates = cmd_output::observations(&args.candidates)?;
    let outcomes = evaluate_text(&matcher, &candidates);
    cmd_output::report(&args.display, &matcher, &outcomes)
}
