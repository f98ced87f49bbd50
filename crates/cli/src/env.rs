// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables read by sigmatch.
//!
//! Names are generated by `build.rs` so the binary and tests agree on them.

use std::ffi::OsString;

pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

/// Whether the variable is set to any value, including empty.
pub fn is_set(name: &str) -> bool {
    std::env::var_os(name).is_some()
}

/// Tracing filter directives, if configured.
pub fn log_filter() -> Option<OsString> {
    std::env::var_os(names::SIGMATCH_LOG)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
