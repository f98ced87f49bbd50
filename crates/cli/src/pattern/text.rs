// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text matchers: literal substring or regular expression search.

use std::fmt;
use std::str::FromStr;

use memchr::memmem::Finder;
use regex::bytes::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::fields::{FieldSource, json_type_name};

/// How a structured text matcher interprets its `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Case-sensitive substring containment.
    Contains,
    /// Unanchored regular expression search.
    Pcre,
}

impl MatchType {
    /// Keyword as written in signature files.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Contains => "contains",
            MatchType::Pcre => "pcre",
        }
    }
}

impl FromStr for MatchType {
    type Err = Error;

    /// Keywords are case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "contains" => Ok(MatchType::Contains),
            "pcre" => Ok(MatchType::Pcre),
            _ => Err(Error::UnknownOperator(s.to_string())),
        }
    }
}

/// A predicate over text, built once and evaluated any number of times.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    /// Literal to search for, or the regex source without delimiters.
    value: String,
    compiled: Compiled,
}

#[derive(Debug, Clone)]
enum Compiled {
    Literal(Finder<'static>),
    Regex(Regex),
}

impl TextMatcher {
    /// Build from the compact form used in signature files.
    ///
    /// `/source/` (at least the two delimiters) is a regex; any other text
    /// is a literal.
    pub fn from_compact(text: &str) -> Result<Self> {
        match text.strip_prefix('/').and_then(|rest| rest.strip_suffix('/')) {
            Some(source) => Self::regex(source),
            None => Ok(Self::literal(text)),
        }
    }

    /// Build from a structured object with a required `value` and an
    /// optional `matchType` (`contains`, the default, or `pcre`).
    pub fn from_structured<F: FieldSource + ?Sized>(source: &F) -> Result<Self> {
        let value = source
            .get_string_checked("value", true)?
            .ok_or_else(|| Error::Schema("missing required field `value`".to_string()))?;

        let match_type = source
            .get_string_checked("matchType", false)?
            .map(MatchType::from_str)
            .transpose()?
            .unwrap_or(MatchType::Contains);

        match match_type {
            MatchType::Contains => Ok(Self::literal(value)),
            MatchType::Pcre => Self::regex(value),
        }
    }

    /// Build from a JSON value: a string is the compact form, an object the
    /// structured form.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Self::from_compact(text),
            Value::Object(map) => Self::from_structured(map),
            other => Err(Error::Type(json_type_name(other).to_string())),
        }
    }

    fn literal(value: &str) -> Self {
        tracing::debug!(literal = value, "built literal text matcher");
        Self {
            value: value.to_string(),
            compiled: Compiled::Literal(Finder::new(value).into_owned()),
        }
    }

    fn regex(source: &str) -> Result<Self> {
        let regex = Regex::new(source)?;
        tracing::debug!(pattern = source, "compiled regex text matcher");
        Ok(Self {
            value: source.to_string(),
            compiled: Compiled::Regex(regex),
        })
    }

    /// Whether `candidate` contains the literal, or the regex finds a match
    /// anywhere in it.
    pub fn matches(&self, candidate: impl AsRef<[u8]>) -> bool {
        let haystack = candidate.as_ref();
        match &self.compiled {
            Compiled::Literal(finder) => finder.find(haystack).is_some(),
            Compiled::Regex(regex) => regex.is_match(haystack),
        }
    }

    /// The literal, or the regex source without delimiters.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_regex(&self) -> bool {
        matches!(self.compiled, Compiled::Regex(_))
    }

    pub fn match_type(&self) -> MatchType {
        if self.is_regex() {
            MatchType::Pcre
        } else {
            MatchType::Contains
        }
    }
}

impl PartialEq for TextMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.is_regex() == other.is_regex() && self.value == other.value
    }
}

impl Eq for TextMatcher {}

impl FromStr for TextMatcher {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_compact(s)
    }
}

/// Renders the compact encoding: `/source/` or the raw literal.
impl fmt::Display for TextMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_regex() {
            write!(f, "/{}/", self.value)
        } else {
            f.write_str(&self.value)
        }
    }
}

#[derive(Serialize)]
struct StructuredForm<'a> {
    value: &'a str,
    #[serde(rename = "matchType")]
    match_type: &'static str,
}

impl Serialize for TextMatcher {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        // A literal shaped like `/.../` would read back as a regex.
        let ambiguous = !self.is_regex()
            && self.value.len() >= 2
            && self.value.starts_with('/')
            && self.value.ends_with('/');

        if ambiguous {
            StructuredForm {
                value: &self.value,
                match_type: MatchType::Contains.as_str(),
            }
            .serialize(serializer)
        } else {
            serializer.collect_str(self)
        }
    }
}

impl<'de> Deserialize<'de> for TextMatcher {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
