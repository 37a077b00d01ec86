use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::block::ContentBlock;
use super::text::PlainText;
use super::vocab::{Category, ContentType, Difficulty};
use crate::error::ContentError;
use crate::validation::Validator;

/// Descriptive data about a problem or lesson.
///
/// `category` and `difficulty` are optional here because the validator only
/// checks them when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub id: u64,
    pub title: PlainText,
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub tags: Vec<PlainText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default)]
    pub draft: bool,
    /// ISO-8601 timestamp, kept as supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub title: PlainText,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

/// The root of a problem or lesson document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalContent {
    pub metadata: Metadata,
    pub statement: Vec<ContentBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solutions: Option<Vec<Solution>>,
}

impl CanonicalContent {
    /// Validates `value` and, only if it is schema-conformant, converts it into
    /// the typed model.
    pub fn from_value(value: &Value) -> Result<Self, ContentError> {
        let result = Validator::new().validate(value);
        if !result.is_valid() {
            return Err(ContentError::Invalid(result));
        }
        Self::deserialize(value).map_err(ContentError::Shape)
    }

    /// Decodes JSON text, then behaves like [`CanonicalContent::from_value`].
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let value: Value = serde_json::from_str(json).map_err(ContentError::Json)?;
        Self::from_value(&value)
    }

    pub fn solutions(&self) -> &[Solution] {
        self.solutions.as_deref().unwrap_or_default()
    }
}
