use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The closed set of validation error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidType,
    MissingRequired,
    InvalidValue,
    ValueTooLong,
    ArrayEmpty,
    ArrayTooLong,
    InvalidLength,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidType => "INVALID_TYPE",
            ErrorCode::MissingRequired => "MISSING_REQUIRED",
            ErrorCode::InvalidValue => "INVALID_VALUE",
            ErrorCode::ValueTooLong => "VALUE_TOO_LONG",
            ErrorCode::ArrayEmpty => "ARRAY_EMPTY",
            ErrorCode::ArrayTooLong => "ARRAY_TOO_LONG",
            ErrorCode::InvalidLength => "INVALID_LENGTH",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single schema violation, located by its path in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{path}: {message}")]
pub struct ValidationError {
    pub path: String,
    pub message: String,
    pub code: ErrorCode,
}

/// Outcome of one validation run.
///
/// Errors appear in discovery order: depth-first, fields in declaration
/// order. `valid` is true exactly when there are no errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Errors located at `prefix` or anywhere beneath it.
    pub fn errors_at<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| {
            e.path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(['.', '[']))
        })
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            return f.write_str("valid");
        }
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}] {error}", error.code)?;
        }
        Ok(())
    }
}
