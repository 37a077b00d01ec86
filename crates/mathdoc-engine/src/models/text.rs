use serde::{Deserialize, Serialize};

/// Author-trusted text that may carry inline markup or math delimiters.
///
/// Rendered verbatim. Paragraph text, list items, quote text and LaTeX
/// source are rich text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(String);

/// Plain text that is always HTML-escaped when rendered.
///
/// Titles, headers, captions, alt text and tags are plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlainText(String);

macro_rules! text_newtype {
    ($name:ident) => {
        impl $name {
            pub fn new(text: impl Into<String>) -> Self {
                Self(text.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl From<String> for $name {
            fn from(text: String) -> Self {
                Self(text)
            }
        }

        impl From<&str> for $name {
            fn from(text: &str) -> Self {
                Self(text.to_string())
            }
        }
    };
}

text_newtype!(RichText);
text_newtype!(PlainText);
