use serde_json::{Map, Value};

use super::error::{ErrorCode, ValidationError, ValidationResult};
use super::path::FieldPath;

/// Error accumulator for a single validation run.
///
/// A fresh value is created for every top-level call and consumed by
/// [`Diagnostics::finish`], so nothing carries over between runs.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    errors: Vec<ValidationError>,
}

impl Diagnostics {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, path: &FieldPath, code: ErrorCode, message: impl Into<String>) {
        self.errors.push(ValidationError {
            path: path.to_string(),
            message: message.into(),
            code,
        });
    }

    pub(crate) fn finish(self) -> ValidationResult {
        ValidationResult::from_errors(self.errors)
    }

    /// Returns `value` as an object, reporting `INVALID_TYPE` at `path` otherwise.
    pub(crate) fn expect_object<'v>(
        &mut self,
        value: &'v Value,
        path: &FieldPath,
        what: &str,
    ) -> Option<&'v Map<String, Value>> {
        let object = value.as_object();
        if object.is_none() {
            self.push(path, ErrorCode::InvalidType, format!("{what} must be an object"));
        }
        object
    }

    /// A required, non-empty string field of a block payload.
    ///
    /// Absent is `MISSING_REQUIRED`, a non-string is `INVALID_TYPE` and an
    /// empty string is `INVALID_VALUE`. Returns the string when it passes.
    pub(crate) fn required_text<'v>(
        &mut self,
        data: &'v Map<String, Value>,
        field: &str,
        path: &FieldPath,
    ) -> Option<&'v str> {
        let path = path.field(field);
        match data.get(field) {
            None => {
                self.push(&path, ErrorCode::MissingRequired, format!("Missing required field: {field}"));
                None
            }
            Some(Value::String(text)) if text.is_empty() => {
                self.push(&path, ErrorCode::InvalidValue, format!("{field} must not be empty"));
                None
            }
            Some(Value::String(text)) => Some(text.as_str()),
            Some(_) => {
                self.push(&path, ErrorCode::InvalidType, format!("{field} must be a string"));
                None
            }
        }
    }

    /// An optional string field: only a present non-string is an error.
    pub(crate) fn optional_string(&mut self, data: &Map<String, Value>, field: &str, path: &FieldPath) {
        if let Some(value) = data.get(field)
            && !value.is_string()
        {
            self.push(&path.field(field), ErrorCode::InvalidType, format!("{field} must be a string"));
        }
    }

    /// A title: a non-empty string no longer than `max_chars`.
    ///
    /// Anything that is not a non-empty string is `INVALID_VALUE`; an
    /// over-long title is reported only as `VALUE_TOO_LONG`.
    pub(crate) fn bounded_title(&mut self, value: Option<&Value>, path: &FieldPath, max_chars: usize, what: &str) {
        match value.and_then(Value::as_str) {
            Some(title) if !title.is_empty() => {
                let len = title.chars().count();
                if len > max_chars {
                    self.push(
                        path,
                        ErrorCode::ValueTooLong,
                        format!("{what} must be at most {max_chars} characters (got {len})"),
                    );
                }
            }
            _ => self.push(path, ErrorCode::InvalidValue, format!("{what} must be a non-empty string")),
        }
    }
}

/// Whether `value` is a string naming a member of the closed vocabulary `T`.
pub(crate) fn is_member<T: std::str::FromStr>(value: &Value) -> bool {
    value.as_str().is_some_and(|s| s.parse::<T>().is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn required_text_distinguishes_missing_wrong_type_and_empty() {
        let mut diagnostics = Diagnostics::new();
        let path = FieldPath::root().field("data");

        diagnostics.required_text(&data(json!({})), "text", &path);
        diagnostics.required_text(&data(json!({"text": 3})), "text", &path);
        diagnostics.required_text(&data(json!({"text": ""})), "text", &path);
        let fine = data(json!({"text": "fine"}));
        let ok = diagnostics.required_text(&fine, "text", &path);

        assert_eq!(ok, Some("fine"));
        let codes: Vec<_> = diagnostics.finish().into_errors().into_iter().map(|e| e.code).collect();
        assert_eq!(
            codes,
            vec![ErrorCode::MissingRequired, ErrorCode::InvalidType, ErrorCode::InvalidValue]
        );
    }

    #[test]
    fn bounded_title_counts_characters_not_bytes() {
        let mut diagnostics = Diagnostics::new();
        let title = json!("é".repeat(5));

        diagnostics.bounded_title(Some(&title), &FieldPath::root().field("title"), 5, "Title");

        assert!(diagnostics.finish().is_valid());
    }

    #[test]
    fn bounded_title_reports_only_length_for_long_titles() {
        let mut diagnostics = Diagnostics::new();
        let title = json!("x".repeat(6));

        diagnostics.bounded_title(Some(&title), &FieldPath::root().field("title"), 5, "Title");

        let errors = diagnostics.finish().into_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::ValueTooLong);
    }
}
