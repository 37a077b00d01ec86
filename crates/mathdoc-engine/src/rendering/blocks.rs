use crate::models::{
    BlockKind, ContentBlock, HeaderData, ImageData, ListData, ListStyle, MathData, QuoteData,
};

use super::escape::ToHtml;
use super::options::RenderOptions;

/// Renders one block, or an empty string for an unsupported block.
pub(super) fn render_block(block: &ContentBlock, options: &RenderOptions) -> String {
    let (kind, inner) = match block {
        ContentBlock::Paragraph(p) => (BlockKind::Paragraph, format!("<p>{}</p>", p.text.to_html())),
        ContentBlock::Header(h) => (BlockKind::Header, header(h)),
        ContentBlock::List(l) => (BlockKind::List, list(l)),
        ContentBlock::Quote(q) => (BlockKind::Quote, quote(q)),
        ContentBlock::Math(m) => (BlockKind::Math, math(m, options)),
        ContentBlock::Image(image) => {
            let figure = figure(image, options);
            // A block container would stop following text from wrapping
            // around a floated image.
            if image.alignment_or_default().is_floating() {
                return figure;
            }
            (BlockKind::Image, figure)
        }
        ContentBlock::Unsupported { kind, .. } => {
            log::warn!("Skipping block with unsupported type {kind:?}");
            return String::new();
        }
    };

    format!(
        "<div class=\"{}\" data-block-type=\"{kind}\">{inner}</div>",
        options.css_classes.block
    )
}

fn header(header: &HeaderData) -> String {
    let level = header.level.clamp(1, 6);
    format!("<h{level}>{}</h{level}>", header.text.to_html())
}

fn list(list: &ListData) -> String {
    let tag = match list.style {
        ListStyle::Ordered => "ol",
        ListStyle::Unordered => "ul",
    };
    let items: String = list
        .items
        .iter()
        .map(|item| format!("<li>{}</li>", item.to_html()))
        .collect();
    format!("<{tag}>{items}</{tag}>")
}

fn quote(quote: &QuoteData) -> String {
    let caption = quote
        .caption
        .as_ref()
        .map(|c| format!("<footer><cite>{}</cite></footer>", c.to_html()))
        .unwrap_or_default();
    format!("<blockquote><p>{}</p>{caption}</blockquote>", quote.text.to_html())
}

fn math(math: &MathData, options: &RenderOptions) -> String {
    let (open, close) = options.math_delimiters.pair(math.display);
    let latex = math.latex.to_html();
    if math.display {
        format!("<div class=\"math math-display\">{open}{latex}{close}</div>")
    } else {
        format!("<span class=\"math math-inline\">{open}{latex}{close}</span>")
    }
}

fn figure(image: &ImageData, options: &RenderOptions) -> String {
    let alignment = image.alignment_or_default();
    let size = image.size_or_default();
    let alt = image
        .alt
        .as_ref()
        .map(|alt| alt.to_html())
        .unwrap_or_default();
    let caption = image
        .caption
        .as_ref()
        .map(|c| format!("<figcaption>{}</figcaption>", c.to_html()))
        .unwrap_or_default();

    format!(
        "<figure class=\"content-image image-align-{alignment} image-size-{size}\"><img src=\"{}{}\" alt=\"{alt}\">{caption}</figure>",
        options.image_base_url, image.url
    )
}
