use serde::{Deserialize, Serialize};

/// Options for HTML rendering. Every key is optional when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Emit the title/category/difficulty/tags header before the statement.
    pub include_metadata: bool,
    pub math_delimiters: MathDelimiters,
    /// Prepended verbatim to every image url, e.g. a CDN origin.
    pub image_base_url: String,
    pub css_classes: CssClasses,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_metadata: true,
            math_delimiters: MathDelimiters::default(),
            image_base_url: String::new(),
            css_classes: CssClasses::default(),
        }
    }
}

/// Delimiter convention expected by the downstream math typesetter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MathDelimiters {
    /// `$...$` inline, `$$...$$` display.
    #[default]
    MathJax,
    /// `\(...\)` inline, `\[...\]` display.
    Katex,
}

impl MathDelimiters {
    /// Opening and closing delimiters for the given mode.
    pub fn pair(self, display: bool) -> (&'static str, &'static str) {
        match (self, display) {
            (MathDelimiters::MathJax, false) => ("$", "$"),
            (MathDelimiters::MathJax, true) => ("$$", "$$"),
            (MathDelimiters::Katex, false) => ("\\(", "\\)"),
            (MathDelimiters::Katex, true) => ("\\[", "\\]"),
        }
    }
}

/// Class attribute values for the containers the renderer emits.
///
/// Inserted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssClasses {
    pub wrapper: String,
    pub statement: String,
    pub solutions: String,
    pub solution: String,
    pub block: String,
}

impl Default for CssClasses {
    fn default() -> Self {
        Self {
            wrapper: "math-content".to_string(),
            statement: "content-statement".to_string(),
            solutions: "content-solutions".to_string(),
            solution: "content-solution".to_string(),
            block: "content-block".to_string(),
        }
    }
}
