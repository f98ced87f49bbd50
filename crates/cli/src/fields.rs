// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checked field access on structured matcher definitions.
//!
//! Signature files describe matchers as JSON objects; this is the one
//! capability the matchers need from that object model.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// An object whose string fields can be read with type checking.
pub trait FieldSource {
    /// Read a string field.
    ///
    /// A missing (or `null`) field is `Ok(None)` unless `required`, in which
    /// case it is a schema error. A field holding anything other than a
    /// string is always a schema error.
    fn get_string_checked(&self, name: &str, required: bool) -> Result<Option<&str>>;
}

impl FieldSource for Map<String, Value> {
    fn get_string_checked(&self, name: &str, required: bool) -> Result<Option<&str>> {
        match self.get(name) {
            None | Some(Value::Null) if required => Err(Error::Schema(format!(
                "missing required field `{name}`"
            ))),
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(Error::Schema(format!(
                "field `{name}` must be a string, found {}",
                json_type_name(other)
            ))),
        }
    }
}

impl FieldSource for Value {
    fn get_string_checked(&self, name: &str, required: bool) -> Result<Option<&str>> {
        match self {
            Value::Object(map) => map.get_string_checked(name, required),
            other => Err(Error::Schema(format!(
                "expected an object with field `{name}`, found {}",
                json_type_name(other)
            ))),
        }
    }
}

/// Human-readable name of a JSON value's type.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
