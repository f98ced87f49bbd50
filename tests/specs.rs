//! Behavioral specifications for the sigmatch CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

use prelude::*;
use predicates::str::contains;

// =============================================================================
// COMMAND SPECS
// =============================================================================

/// > sigmatch (bare invocation) shows help
#[test]
fn bare_invocation_shows_help() {
    sigmatch_cmd()
        .assert()
        .success()
        .stdout(contains("Usage:"));
}

#[test]
fn version_exits_successfully() {
    sigmatch_cmd().arg("--version").assert().success();
}

#[test]
fn unknown_subcommand_is_usage_error() {
    sigmatch_cmd().arg("bogus").assert().code(2);
}

// =============================================================================
// TEXT MATCHER SPECS
// =============================================================================

/// > A literal matcher prints matching candidates and exits 0
#[test]
fn text_literal_prints_matches() {
    text(&["foo", "barfoobaz", "nothing", "foo"])
        .assert()
        .code(0)
        .stdout("barfoobaz\nfoo\n");
}

/// > A /regex/ matcher searches anywhere in the candidate
#[test]
fn text_regex_is_unanchored() {
    text(&["/a+/", "aaa", "xaay", "b"])
        .assert()
        .code(0)
        .stdout("aaa\nxaay\n");
}

/// > No matching candidate exits 1
#[test]
fn text_no_match_exits_one() {
    text(&["/a+/", "b", "c"]).assert().code(1).stdout("");
}

/// > Malformed regex fails construction with exit 2
#[test]
fn text_malformed_regex_is_config_error() {
    text(&["/[/", "x"])
        .assert()
        .code(2)
        .stderr(contains("error in regular expression"));
}

/// > Candidates are read from stdin when none are given
#[test]
fn text_reads_stdin_lines() {
    text(&["crash"])
        .write_stdin("no\nsegv crash here\nnope\ncrash\n")
        .assert()
        .code(0)
        .stdout("segv crash here\ncrash\n");
}

/// > --all lists every candidate with a marker
#[test]
fn text_all_lists_markers() {
    text(&["--all", "foo", "foo", "bar"])
        .assert()
        .code(0)
        .stdout("MATCH foo\nMISS  bar\n");
}

/// > --json accepts the structured form
#[test]
fn text_json_structured_pcre() {
    text(&["--json", r#"{"value": "a+", "matchType": "PCRE"}"#, "xaay", "b"])
        .assert()
        .code(0)
        .stdout("xaay\n");
}

/// > --json with an unknown matchType names the token
#[test]
fn text_json_unknown_match_type() {
    text(&["--json", r#"{"value": "a", "matchType": "glob"}"#, "a"])
        .assert()
        .code(2)
        .stderr(contains("unknown match operator specified: glob"));
}

/// > --json without a value field is a schema error
#[test]
fn text_json_missing_value() {
    text(&["--json", r#"{"matchType": "pcre"}"#, "a"])
        .assert()
        .code(2)
        .stderr(contains("schema error"));
}

/// > --json that does not parse is a config error
#[test]
fn text_json_syntax_error() {
    text(&["--json", "{not json", "a"])
        .assert()
        .code(2)
        .stderr(contains("MATCHER is not valid JSON"));
}

/// > -o json reports every result
#[test]
fn text_json_output() {
    let output = text(&["-o", "json", "/a+/", "aaa", "b"])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["matcher"], "/a+/");
    assert_eq!(parsed["matched"], 1);
    assert_eq!(parsed["total"], 2);
    assert_eq!(parsed["results"][1]["observation"], "b");
    assert_eq!(parsed["results"][1]["matched"], false);
}

// =============================================================================
// NUMBER MATCHER SPECS
// =============================================================================

/// > Numbers are hex with or without 0x, implicit ==
#[test]
fn number_implicit_equality_is_hex() {
    number(&["0x10", "10", "16", "0x10"])
        .assert()
        .code(0)
        .stdout("10\n0x10\n");
}

/// > Relational operators compare observed against the matcher value
#[test]
fn number_relational() {
    number(&[">= ff", "ff", "fe", "100"])
        .assert()
        .code(0)
        .stdout("ff\n100\n");
}

/// > The empty matcher only matches an absent observation
#[test]
fn number_absent_matcher() {
    number(&["--all", "", "", "0"])
        .assert()
        .code(0)
        .stdout("MATCH (none)\nMISS  0\n");
}

/// > A present matcher never matches an absent observation
#[test]
fn number_present_matcher_misses_absent() {
    number(&["5", ""]).assert().code(1).stdout("");
}

#[test]
fn number_unknown_operator() {
    number(&["~~ 5", "5"])
        .assert()
        .code(2)
        .stderr(contains("unknown match operator specified: ~~"));
}

#[test]
fn number_invalid_number() {
    number(&["0x1g", "5"])
        .assert()
        .code(2)
        .stderr(contains("invalid number specified: 0x1g"));
}

/// > Observations that are not hex are rejected
#[test]
fn number_invalid_observation() {
    number(&["5", "zz"])
        .assert()
        .code(2)
        .stderr(contains("invalid number specified: zz"));
}

/// > --json accepts a native integer
#[test]
fn number_json_integer() {
    number(&["--json", "16", "10", "16"])
        .assert()
        .code(0)
        .stdout("10\n");
}

/// > --json rejects shapes that are neither string nor integer
#[test]
fn number_json_type_error() {
    number(&["--json", "1.5", "1"])
        .assert()
        .code(2)
        .stderr(contains("invalid type float"));
}

#[test]
fn number_reads_stdin_lines() {
    number(&["< 1000"])
        .write_stdin("0\n\nfff\n1000\n")
        .assert()
        .code(0)
        .stdout("0\nfff\n");
}

#[test]
fn number_json_output_renders_matcher() {
    number(&["-o", "json", "<= 20", "20"])
        .assert()
        .code(0)
        .stdout(contains(r#""matcher": "<= 0x20""#));
}

// =============================================================================
// ENVIRONMENT SPECS
// =============================================================================

/// > --color forces ANSI escapes even when NO_COLOR is set
#[test]
fn color_flag_forces_color() {
    text(&["--all", "--color", "foo", "foo"])
        .assert()
        .code(0)
        .stdout(contains("\x1b["));
}

/// > NO_COLOR disables color
#[test]
fn no_color_env_disables_color() {
    text(&["--all", "foo", "foo"])
        .assert()
        .code(0)
        .stdout(contains("\x1b[").not());
}

/// > SIGMATCH_LOG enables diagnostics on stderr
#[test]
fn log_env_enables_debug_output() {
    text(&["/a+/", "aaa"])
        .env("SIGMATCH_LOG", "debug")
        .assert()
        .code(0)
        .stderr(contains("compiled regex text matcher"));
}
