// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Number matchers: exact or relational comparison against hex integers.
//!
//! Text encoding (as written in signature files):
//! - `""` → matches only an absent observation
//! - `"ff"`, `"0xff"` → equal to 255
//! - `">= ff"` → one of `==`, `<`, `<=`, `>`, `>=`, whitespace, hex number
//!
//! Numbers are always base 16, with or without a `0x` prefix.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::fields::json_type_name;

/// Comparison applied as `observed <op> value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    #[default]
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        }
    }

    fn holds(self, ordering: Ordering) -> bool {
        match self {
            Operator::Eq => ordering.is_eq(),
            Operator::Lt => ordering.is_lt(),
            Operator::Le => ordering.is_le(),
            Operator::Gt => ordering.is_gt(),
            Operator::Ge => ordering.is_ge(),
        }
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "==" => Ok(Operator::Eq),
            "<" => Ok(Operator::Lt),
            "<=" => Ok(Operator::Le),
            ">" => Ok(Operator::Gt),
            ">=" => Ok(Operator::Ge),
            _ => Err(Error::UnknownOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A predicate over an optional integer.
///
/// A matcher without a value stands for "no value could be determined"
/// (e.g. an unknown crash address) and matches only absent observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberMatcher {
    operator: Operator,
    value: Option<i128>,
}

impl NumberMatcher {
    /// The matcher for "no value": matches only absent observations.
    pub const fn absent() -> Self {
        Self {
            operator: Operator::Eq,
            value: None,
        }
    }

    /// Exact match against `value`.
    pub const fn from_integer(value: i128) -> Self {
        Self {
            operator: Operator::Eq,
            value: Some(value),
        }
    }

    /// Relational match against `value`.
    pub const fn compare(operator: Operator, value: i128) -> Self {
        Self {
            operator,
            value: Some(value),
        }
    }

    /// Parse the text encoding.
    pub fn from_text(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Ok(Self::absent());
        }

        let trimmed = text.trim();
        let (operator, number) = match trimmed.split_once(char::is_whitespace) {
            Some((op, rest)) => (op.parse()?, rest.trim_start()),
            None => (Operator::Eq, trimmed),
        };

        let matcher = Self::compare(operator, parse_hex(number)?);
        tracing::debug!(%matcher, "built number matcher");
        Ok(matcher)
    }

    /// Build from a JSON value: a string is the text encoding, an integer
    /// an exact match.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Self::from_text(text),
            Value::Number(n) => n
                .as_i64()
                .map(i128::from)
                .or_else(|| n.as_u64().map(i128::from))
                .map(Self::from_integer)
                .ok_or_else(|| Error::Type(json_type_name(value).to_string())),
            other => Err(Error::Type(json_type_name(other).to_string())),
        }
    }

    /// Compare an observation.
    ///
    /// An absent observation matches only the absent matcher; the absent
    /// matcher never matches a present observation.
    pub fn matches(&self, observed: Option<i128>) -> bool {
        match (observed, self.value) {
            (None, expected) => expected.is_none(),
            (Some(_), None) => false,
            (Some(observed), Some(expected)) => self.operator.holds(observed.cmp(&expected)),
        }
    }

    /// Ignored when [`value`](Self::value) is absent.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> Option<i128> {
        self.value
    }

    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }
}

impl Default for NumberMatcher {
    fn default() -> Self {
        Self::absent()
    }
}

impl From<i64> for NumberMatcher {
    fn from(value: i64) -> Self {
        Self::from_integer(value.into())
    }
}

impl From<u64> for NumberMatcher {
    fn from(value: u64) -> Self {
        Self::from_integer(value.into())
    }
}

impl FromStr for NumberMatcher {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

/// Renders the text encoding; parsing it back yields an equal matcher.
impl fmt::Display for NumberMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(value) = self.value else {
            return Ok(());
        };
        if self.operator != Operator::Eq {
            write!(f, "{} ", self.operator)?;
        }
        if value < 0 {
            write!(f, "-{:#x}", value.unsigned_abs())
        } else {
            write!(f, "{value:#x}")
        }
    }
}

impl Serialize for NumberMatcher {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NumberMatcher {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}

/// Parse an observation in the same textual form: `""` is absent,
/// anything else a hex number.
pub fn parse_observed(text: &str) -> Result<Option<i128>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        parse_hex(trimmed).map(Some)
    }
}

/// Parse a base-16 integer with optional sign and optional `0x` prefix.
fn parse_hex(token: &str) -> Result<i128> {
    let invalid = || Error::InvalidNumber(token.to_string());

    let (negative, unsigned) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .unwrap_or(unsigned);

    // from_str_radix would also take a sign here
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let magnitude = u128::from_str_radix(digits, 16).map_err(|_| invalid())?;
    if negative {
        0i128.checked_sub_unsigned(magnitude).ok_or_else(invalid)
    } else {
        i128::try_from(magnitude).map_err(|_| invalid())
    }
}

#[cfg(test)]
#[path = "number_tests.rs"]
mod tests;
