use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::text::{PlainText, RichText};
use super::vocab::{BlockKind, ImageAlignment, ImageSize, ListStyle};

/// An atomic unit of content.
///
/// On the wire a block is `{ "type": "<kind>", "data": { ... } }`. Blocks whose
/// `type` is not one of the six known kinds deserialize into
/// [`ContentBlock::Unsupported`] so a single unfamiliar block never prevents the
/// rest of a document from loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBlock", into = "RawBlock")]
pub enum ContentBlock {
    Paragraph(ParagraphData),
    Header(HeaderData),
    List(ListData),
    Quote(QuoteData),
    Math(MathData),
    Image(ImageData),
    /// A block with an unrecognized `type`, kept as-is.
    Unsupported { kind: String, data: Value },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphData {
    pub text: RichText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderData {
    pub text: PlainText,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListData {
    pub style: ListStyle,
    pub items: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteData {
    pub text: RichText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<PlainText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathData {
    pub latex: RichText,
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<PlainText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<PlainText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<ImageAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ImageSize>,
}

impl ContentBlock {
    /// The known kind of this block, or `None` for [`ContentBlock::Unsupported`].
    pub fn kind(&self) -> Option<BlockKind> {
        match self {
            ContentBlock::Paragraph(_) => Some(BlockKind::Paragraph),
            ContentBlock::Header(_) => Some(BlockKind::Header),
            ContentBlock::List(_) => Some(BlockKind::List),
            ContentBlock::Quote(_) => Some(BlockKind::Quote),
            ContentBlock::Math(_) => Some(BlockKind::Math),
            ContentBlock::Image(_) => Some(BlockKind::Image),
            ContentBlock::Unsupported { .. } => None,
        }
    }

    /// The wire spelling of this block's `type`.
    pub fn type_name(&self) -> &str {
        match self {
            ContentBlock::Unsupported { kind, .. } => kind.as_str(),
            other => other.kind().map(BlockKind::as_str).unwrap_or_default(),
        }
    }

    pub fn paragraph(text: impl Into<RichText>) -> Self {
        ContentBlock::Paragraph(ParagraphData { text: text.into() })
    }

    pub fn header(text: impl Into<PlainText>, level: u8) -> Self {
        ContentBlock::Header(HeaderData {
            text: text.into(),
            level,
        })
    }

    pub fn math(latex: impl Into<RichText>, display: bool) -> Self {
        ContentBlock::Math(MathData {
            latex: latex.into(),
            display,
        })
    }
}

impl ImageData {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: None,
            caption: None,
            alignment: None,
            size: None,
        }
    }

    pub fn alignment_or_default(&self) -> ImageAlignment {
        self.alignment.unwrap_or_default()
    }

    pub fn size_or_default(&self) -> ImageSize {
        self.size.unwrap_or_default()
    }
}

/// Wire form of a block: the discriminator plus an untyped payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Value,
}

impl TryFrom<RawBlock> for ContentBlock {
    type Error = serde_json::Error;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        let Ok(kind) = raw.kind.parse::<BlockKind>() else {
            return Ok(ContentBlock::Unsupported {
                kind: raw.kind,
                data: raw.data,
            });
        };

        let data = raw.data;
        Ok(match kind {
            BlockKind::Paragraph => ContentBlock::Paragraph(serde_json::from_value(data)?),
            BlockKind::Header => ContentBlock::Header(serde_json::from_value(data)?),
            BlockKind::List => ContentBlock::List(serde_json::from_value(data)?),
            BlockKind::Quote => ContentBlock::Quote(serde_json::from_value(data)?),
            BlockKind::Math => ContentBlock::Math(serde_json::from_value(data)?),
            BlockKind::Image => ContentBlock::Image(serde_json::from_value(data)?),
        })
    }
}

impl From<ContentBlock> for RawBlock {
    fn from(block: ContentBlock) -> Self {
        let kind = block.type_name().to_string();
        // Serializing these plain structs into a Value cannot fail.
        let data = match block {
            ContentBlock::Paragraph(d) => serde_json::to_value(d),
            ContentBlock::Header(d) => serde_json::to_value(d),
            ContentBlock::List(d) => serde_json::to_value(d),
            ContentBlock::Quote(d) => serde_json::to_value(d),
            ContentBlock::Math(d) => serde_json::to_value(d),
            ContentBlock::Image(d) => serde_json::to_value(d),
            ContentBlock::Unsupported { data, .. } => Ok(data),
        }
        .unwrap_or_default();

        RawBlock { kind, data }
    }
}
