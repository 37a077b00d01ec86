//! # mathdoc-engine
//!
//! The canonical document model for math problems and lessons, with a
//! validating parser and a deterministic HTML renderer.
//!
//! ## Pipeline
//!
//! ```text
//! untrusted JSON ──► validation::validate ──► ValidationResult
//!        │
//!        └─► CanonicalContent::from_value ──► CanonicalContent ──► rendering::Renderer ──► HTML
//! ```
//!
//! The validator and the renderer are independent pure functions. The
//! renderer assumes well-formed input; callers that need strictness should go
//! through [`CanonicalContent::from_value`], which only yields a typed
//! document once validation reports no errors.
//!
//! ## Example
//!
//! ```
//! use mathdoc_engine::{CanonicalContent, Renderer};
//!
//! let json = r#"{
//!     "metadata": {"id": 1, "title": "Warm-up", "contentType": "problem"},
//!     "statement": [{"type": "paragraph", "data": {"text": "Compute $2 + 2$."}}]
//! }"#;
//!
//! let content = CanonicalContent::from_json_str(json).unwrap();
//! let html = Renderer::default().render(&content);
//! assert!(html.contains("<p>Compute $2 + 2$.</p>"));
//! ```

pub mod error;
pub mod models;
pub mod rendering;
pub mod validation;

// Re-export key types for easier usage
pub use error::ContentError;
pub use models::*;
pub use rendering::{CssClasses, MathDelimiters, RenderOptions, Renderer, ToHtml, render, render_blocks};
pub use validation::{ErrorCode, FieldPath, ValidationError, ValidationResult, Validator, validate};
