// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

/// Matcher construction errors.
///
/// Every failure happens while a matcher is being built; evaluating a
/// constructed matcher never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required structured field missing, or present with the wrong type
    #[error("schema error: {0}")]
    Schema(String),

    /// Regular expression failed to compile
    #[error("error in regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Unrecognized match type keyword or comparison token
    #[error("unknown match operator specified: {0}")]
    UnknownOperator(String),

    /// Number token is not a base-16 integer
    #[error("invalid number specified: {0}")]
    InvalidNumber(String),

    /// Input of a shape the constructor does not accept
    #[error("invalid type {0} in matcher")]
    Type(String),
}

/// Result type using sigmatch Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes for the `sigmatch` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// At least one observation matched
    Success = 0,
    /// No observation matched
    NoMatch = 1,
    /// Matcher failed to construct, or bad arguments
    ConfigError = 2,
    /// Internal error (I/O)
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Schema(_)
            | Error::InvalidPattern(_)
            | Error::UnknownOperator(_)
            | Error::InvalidNumber(_)
            | Error::Type(_) => ExitCode::ConfigError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
