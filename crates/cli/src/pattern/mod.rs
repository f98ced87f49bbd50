// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match criteria primitives for crash signatures.
//!
//! - [`TextMatcher`]: literal substring (memchr) or regex search (regex crate)
//! - [`NumberMatcher`]: exact or relational comparison of hex integers,
//!   including the "no value" matcher

pub mod number;
pub mod text;

pub use number::{NumberMatcher, Operator, parse_observed};
pub use text::{MatchType, TextMatcher};
