// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluate one matcher over many observations in parallel.
//!
//! Matchers are immutable, so a single instance is shared across the rayon
//! pool without synchronization. Results keep input order.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::pattern::{NumberMatcher, TextMatcher, parse_observed};

/// Result of evaluating one observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// The observation as given.
    pub observation: String,
    pub matched: bool,
}

/// Match every candidate text.
pub fn evaluate_text(matcher: &TextMatcher, candidates: &[String]) -> Vec<Outcome> {
    let outcomes: Vec<Outcome> = candidates
        .par_iter()
        .map(|candidate| Outcome {
            observation: candidate.clone(),
            matched: matcher.matches(candidate),
        })
        .collect();
    tracing::debug!(
        matcher = %matcher,
        total = outcomes.len(),
        matched = count_matched(&outcomes),
        "evaluated text matcher"
    );
    outcomes
}

/// Parse every observation as hex (`""` = absent) and compare it.
///
/// Fails on the first observation that is not a hex number.
pub fn evaluate_numbers(matcher: &NumberMatcher, observations: &[String]) -> Result<Vec<Outcome>> {
    let outcomes: Vec<Outcome> = observations
        .par_iter()
        .map(|text| {
            let observed = parse_observed(text)?;
            Ok(Outcome {
                observation: text.clone(),
                matched: matcher.matches(observed),
            })
        })
        .collect::<Result<_>>()?;
    tracing::debug!(
        matcher = %matcher,
        total = outcomes.len(),
        matched = count_matched(&outcomes),
        "evaluated number matcher"
    );
    Ok(outcomes)
}

pub fn count_matched(outcomes: &[Outcome]) -> usize {
    outcomes.iter().filter(|o| o.matched).count()
}

#[cfg(test)]
#[path = "evaluate_tests.rs"]
mod tests;
