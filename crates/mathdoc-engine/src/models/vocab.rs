//! Closed vocabularies shared by the validator and the typed model.
//!
//! Every enum here has a fixed wire spelling. The validator checks membership
//! through [`FromStr`](std::str::FromStr) and builds its "must be one of"
//! messages from `ALL`, so the schema and the model cannot disagree.

use thiserror::Error;

/// Returned when a string does not name any variant of a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {vocabulary} value: {value:?}")]
pub struct UnknownVariant {
    pub vocabulary: &'static str,
    pub value: String,
}

macro_rules! closed_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(UnknownVariant {
                        vocabulary: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

closed_vocabulary! {
    /// Whether a content item is a problem (may carry solutions) or a lesson.
    ContentType {
        Problem => "problem",
        Lesson => "lesson",
    }
}

closed_vocabulary! {
    /// Subject area of a content item.
    Category {
        Algebra => "Algebra",
        Geometry => "Geometry",
        NumberTheory => "Number Theory",
        Combinatorics => "Combinatorics",
        Calculus => "Calculus",
        Probability => "Probability",
    }
}

closed_vocabulary! {
    Difficulty {
        Easy => "Easy",
        Medium => "Medium",
        Hard => "Hard",
    }
}

closed_vocabulary! {
    /// The `type` discriminator of a content block.
    BlockKind {
        Paragraph => "paragraph",
        Header => "header",
        List => "list",
        Quote => "quote",
        Math => "math",
        Image => "image",
    }
}

closed_vocabulary! {
    ListStyle {
        Ordered => "ordered",
        Unordered => "unordered",
    }
}

closed_vocabulary! {
    /// Layout of an image relative to the surrounding text.
    ///
    /// The float variants let following text wrap around the image.
    #[derive(Default)]
    ImageAlignment {
        #[default]
        Center => "center",
        FloatLeft => "float-left",
        FloatRight => "float-right",
    }
}

closed_vocabulary! {
    #[derive(Default)]
    ImageSize {
        Small => "small",
        #[default]
        Medium => "medium",
        Large => "large",
        Full => "full",
    }
}

impl ImageAlignment {
    /// Floated images must be emitted without a block container.
    pub fn is_floating(self) -> bool {
        matches!(self, ImageAlignment::FloatLeft | ImageAlignment::FloatRight)
    }
}

/// Joins the wire spellings of a vocabulary for use in diagnostics.
pub fn describe_allowed<T: std::fmt::Display>(all: &[T]) -> String {
    all.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
