use serde_json::Value;

use super::diagnostics::{Diagnostics, is_member};
use super::error::ErrorCode;
use super::path::FieldPath;
use crate::models::{Category, ContentType, Difficulty, describe_allowed};

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_TAGS: usize = 10;
pub const MAX_TAG_CHARS: usize = 50;

impl Diagnostics {
    /// Every metadata field is checked independently so that all violations
    /// surface together.
    pub(crate) fn check_metadata(&mut self, value: &Value, path: &FieldPath) {
        let Some(meta) = self.expect_object(value, path, "Metadata") else {
            return;
        };

        let id = meta.get("id");
        if !id.and_then(Value::as_u64).is_some_and(|id| id >= 1) {
            let message = match id {
                Some(id) if id.is_f64() => {
                    format!("id must be an integer >= 1 (got {id}, a floating-point number)")
                }
                _ => "id must be an integer >= 1".to_string(),
            };
            self.push(&path.field("id"), ErrorCode::InvalidValue, message);
        }

        self.bounded_title(meta.get("title"), &path.field("title"), MAX_TITLE_CHARS, "Title");

        match meta.get("contentType") {
            None => self.push(
                &path.field("contentType"),
                ErrorCode::MissingRequired,
                "Missing required field: contentType",
            ),
            Some(content_type) if !is_member::<ContentType>(content_type) => self.push(
                &path.field("contentType"),
                ErrorCode::InvalidValue,
                format!("contentType must be one of: {}", describe_allowed(ContentType::ALL)),
            ),
            Some(_) => {}
        }

        // Lenient: category and difficulty are only checked when supplied.
        if let Some(category) = meta.get("category")
            && !is_member::<Category>(category)
        {
            self.push(
                &path.field("category"),
                ErrorCode::InvalidValue,
                format!("category must be one of: {}", describe_allowed(Category::ALL)),
            );
        }

        if let Some(difficulty) = meta.get("difficulty")
            && !is_member::<Difficulty>(difficulty)
        {
            self.push(
                &path.field("difficulty"),
                ErrorCode::InvalidValue,
                format!("difficulty must be one of: {}", describe_allowed(Difficulty::ALL)),
            );
        }

        if let Some(tags) = meta.get("tags") {
            self.check_tags(tags, &path.field("tags"));
        }
    }

    fn check_tags(&mut self, value: &Value, path: &FieldPath) {
        let Some(tags) = value.as_array() else {
            self.push(path, ErrorCode::InvalidType, "tags must be an array");
            return;
        };

        if tags.len() > MAX_TAGS {
            self.push(
                path,
                ErrorCode::ArrayTooLong,
                format!("At most {MAX_TAGS} tags are allowed (got {})", tags.len()),
            );
        }

        for (i, tag) in tags.iter().enumerate() {
            let tag_path = path.index(i);
            match tag.as_str() {
                None => self.push(&tag_path, ErrorCode::InvalidType, "Tag must be a string"),
                Some(tag) => {
                    let len = tag.chars().count();
                    if len == 0 || len > MAX_TAG_CHARS {
                        self.push(
                            &tag_path,
                            ErrorCode::InvalidLength,
                            format!("Tag must be 1-{MAX_TAG_CHARS} characters (got {len})"),
                        );
                    }
                }
            }
        }
    }
}
