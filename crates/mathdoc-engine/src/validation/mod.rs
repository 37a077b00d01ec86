//! # Schema Validation
//!
//! Walks untrusted input (a decoded JSON value of any shape) against the
//! canonical content schema and reports every violation it finds.
//!
//! ## Behaviour
//!
//! - Never fails and never stops at the first problem: siblings are always
//!   checked, so one call surfaces every defect.
//! - A non-object document is the only short circuit (a single `INVALID_TYPE`
//!   at `root`).
//! - Within a block, a missing or unknown `type` or a missing `data` stops
//!   checks for that block only.
//! - Extra fields are ignored everywhere.
//!
//! ## Modules
//!
//! - **`error`**: `ErrorCode`, `ValidationError`, `ValidationResult`
//! - **`path`**: `FieldPath`, the `metadata.tags[3]`-style locator
//! - **`diagnostics`**: the per-run error accumulator and shared field checks
//! - **`metadata`**, **`blocks`**, **`solutions`**: checks for each part of a document

mod blocks;
mod diagnostics;
pub mod error;
mod metadata;
pub mod path;
mod solutions;

use serde_json::Value;

pub use blocks::{MAX_HEADER_LEVEL, MIN_HEADER_LEVEL, is_acceptable_image_url};
pub use error::{ErrorCode, ValidationError, ValidationResult};
pub use metadata::{MAX_TAG_CHARS, MAX_TAGS, MAX_TITLE_CHARS};
pub use path::FieldPath;
pub use solutions::MAX_SOLUTION_TITLE_CHARS;

use diagnostics::Diagnostics;

/// Stateless schema validator.
///
/// Each call to [`Validator::validate`] works on its own accumulator, so one
/// validator can be shared freely, including across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, input: &Value) -> ValidationResult {
        let mut diagnostics = Diagnostics::new();
        check_document(&mut diagnostics, input);
        let result = diagnostics.finish();
        log::debug!(
            "validated content: {} error(s)",
            result.errors().len()
        );
        result
    }
}

/// Validates `input` with a default [`Validator`].
pub fn validate(input: &Value) -> ValidationResult {
    Validator::new().validate(input)
}

fn check_document(diagnostics: &mut Diagnostics, input: &Value) {
    let root = FieldPath::root();
    let Some(document) = input.as_object() else {
        diagnostics.push(&root, ErrorCode::InvalidType, "Content must be an object");
        return;
    };

    match document.get("metadata") {
        None => diagnostics.push(&root, ErrorCode::MissingRequired, "Missing required field: metadata"),
        Some(metadata) => diagnostics.check_metadata(metadata, &root.field("metadata")),
    }

    match document.get("statement") {
        None => diagnostics.push(&root, ErrorCode::MissingRequired, "Missing required field: statement"),
        Some(statement) => diagnostics.check_block_array(statement, &root.field("statement")),
    }

    if let Some(solutions) = document.get("solutions") {
        diagnostics.check_solutions(solutions, &root.field("solutions"));
    }
}
