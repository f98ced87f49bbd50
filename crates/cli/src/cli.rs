// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use clap::{Parser, Subcommand};
use termcolor::ColorChoice;

use crate::color::resolve_color;

/// Evaluate crash signature match criteria against observations
#[derive(Parser)]
#[command(name = "sigmatch")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Match text against a literal or /regex/ matcher
    Text(TextArgs),
    /// Compare hex numbers against a number matcher
    Number(NumberArgs),
}

#[derive(clap::Args)]
pub struct TextArgs {
    /// Matcher: a literal, or /regex/
    #[arg(value_name = "MATCHER")]
    pub matcher: String,

    /// Read MATCHER as JSON: a string, or {"value": ..., "matchType": ...}
    #[arg(long)]
    pub json: bool,

    /// Texts to match (default: lines from stdin)
    #[arg(value_name = "CANDIDATE")]
    pub candidates: Vec<String>,

    #[command(flatten)]
    pub display: DisplayArgs,
}

#[derive(clap::Args)]
pub struct NumberArgs {
    /// Matcher: "" (no value), HEX, or "OP HEX" with OP one of == < <= > >=
    #[arg(value_name = "MATCHER")]
    pub matcher: String,

    /// Read MATCHER as JSON: a string in the form above, or an integer
    #[arg(long)]
    pub json: bool,

    /// Hex values to compare, "" for no value (default: lines from stdin)
    #[arg(value_name = "OBSERVED")]
    pub observed: Vec<String>,

    #[command(flatten)]
    pub display: DisplayArgs,
}

#[derive(clap::Args, Default)]
pub struct DisplayArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// List every observation with a MATCH/MISS marker
    #[arg(long)]
    pub all: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

impl DisplayArgs {
    /// Flags win over environment detection.
    pub fn color_choice(&self) -> ColorChoice {
        if self.no_color {
            ColorChoice::Never
        } else if self.color {
            ColorChoice::Always
        } else {
            resolve_color()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
