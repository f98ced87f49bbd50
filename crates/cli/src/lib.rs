// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod cli;
pub mod color;
pub mod env;
pub mod error;
pub mod evaluate;
pub mod fields;
pub mod output;
pub mod pattern;

pub use cli::{Cli, Command, DisplayArgs, NumberArgs, OutputFormat, TextArgs};
pub use error::{Error, ExitCode, Result};
pub use evaluate::{Outcome, evaluate_numbers, evaluate_text};
pub use fields::FieldSource;
pub use pattern::{MatchType, NumberMatcher, Operator, TextMatcher};
