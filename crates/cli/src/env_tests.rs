// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn names_no_color_is_correct() {
    assert_eq!(names::NO_COLOR, "NO_COLOR");
}

#[test]
fn names_color_is_correct() {
    assert_eq!(names::COLOR, "COLOR");
}

#[test]
fn names_ci_is_correct() {
    assert_eq!(names::CI, "CI");
}

#[test]
fn names_log_is_correct() {
    assert_eq!(names::SIGMATCH_LOG, "SIGMATCH_LOG");
}

#[test]
fn unset_variable_is_not_set() {
    assert!(!is_set("SIGMATCH_TEST_SURELY_UNSET_VARIABLE"));
}
