// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Default mode prints each matching observation on its own line. With
//! `--all` every observation is listed:
//! ```text
//! MATCH xaay
//! MISS  b
//! ```

use termcolor::WriteColor;

use super::ABSENT;
use crate::color::scheme;
use crate::evaluate::Outcome;

/// Text output formatter with color support.
pub struct TextFormatter<W> {
    out: W,
    all: bool,
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, all: bool) -> Self {
        Self { out, all }
    }

    pub fn write_outcomes(&mut self, outcomes: &[Outcome]) -> std::io::Result<()> {
        for outcome in outcomes {
            if self.all {
                self.write_marker(outcome.matched)?;
            } else if !outcome.matched {
                continue;
            }
            self.write_observation(&outcome.observation)?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    fn write_marker(&mut self, matched: bool) -> std::io::Result<()> {
        let (spec, label) = if matched {
            (scheme::matched(), "MATCH")
        } else {
            (scheme::missed(), "MISS ")
        };
        self.out.set_color(&spec)?;
        write!(self.out, "{label}")?;
        self.out.reset()?;
        write!(self.out, " ")
    }

    fn write_observation(&mut self, observation: &str) -> std::io::Result<()> {
        if observation.is_empty() {
            self.out.set_color(&scheme::absent())?;
            write!(self.out, "{ABSENT}")?;
            self.out.reset()
        } else {
            write!(self.out, "{observation}")
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
