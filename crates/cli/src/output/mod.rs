// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for match outcomes.

pub mod json;
pub mod text;

/// Placeholder shown for an empty observation in text output.
pub const ABSENT: &str = "(none)";
