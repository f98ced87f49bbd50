// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. NO_COLOR env var → no color
//! 2. COLOR env var → use color
//! 3. default:
//!    - If not stdout.is_tty() → no color
//!    - If CI env var set → no color
//!    - Else → auto

use std::io::IsTerminal;
use termcolor::ColorChoice;

use crate::env::{is_set, names};

/// Resolve color choice from environment variables.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color.
pub fn resolve_color() -> ColorChoice {
    if is_set(names::NO_COLOR) {
        return ColorChoice::Never;
    }
    // COLOR=1 forces color (non-standard but common)
    if is_set(names::COLOR) {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() || is_set(names::CI) {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for match output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Green "MATCH" marker.
    pub fn matched() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Red "MISS" marker.
    pub fn missed() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Dimmed placeholder for an absent observation.
    pub fn absent() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
