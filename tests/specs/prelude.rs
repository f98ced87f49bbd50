//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

/// Returns a Command configured to run the sigmatch binary with color and
/// logging pinned off.
pub fn sigmatch_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sigmatch"));
    cmd.env("NO_COLOR", "1").env_remove("COLOR").env_remove("SIGMATCH_LOG");
    cmd
}

/// `sigmatch text <args>`
pub fn text(args: &[&str]) -> assert_cmd::Command {
    let mut cmd = sigmatch_cmd();
    cmd.arg("text").args(args);
    cmd
}

/// `sigmatch number <args>`
pub fn number(args: &[&str]) -> assert_cmd::Command {
    let mut cmd = sigmatch_cmd();
    cmd.arg("number").args(args);
    cmd
}
