// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use crate::evaluate::{Outcome, count_matched};

/// Top-level JSON document.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    /// Matcher in its compact encoding.
    pub matcher: String,
    pub matched: usize,
    pub total: usize,
    pub results: &'a [Outcome],
}

impl<'a> JsonOutput<'a> {
    pub fn new(matcher: impl ToString, outcomes: &'a [Outcome]) -> Self {
        Self {
            matcher: matcher.to_string(),
            matched: count_matched(outcomes),
            total: outcomes.len(),
            results: outcomes,
        }
    }

    pub fn write<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut out, self)?;
        writeln!(out)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
