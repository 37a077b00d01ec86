use thiserror::Error;

use crate::validation::ValidationResult;

/// Failure to turn untrusted input into a [`CanonicalContent`](crate::models::CanonicalContent).
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Input is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("Content failed validation with {} error(s)", .0.errors().len())]
    Invalid(ValidationResult),

    #[error("Content passed validation but does not fit the typed model: {0}")]
    Shape(#[source] serde_json::Error),
}
