//! # HTML Rendering
//!
//! Turns a [`CanonicalContent`] into a markup string for direct injection into
//! a container element. Rendering is a pure function of the content and the
//! [`RenderOptions`]; it does not validate and never fails.
//!
//! ## Output Order
//!
//! 1. Metadata header (when `include_metadata` is set)
//! 2. Statement section
//! 3. Solutions section (only when there is at least one solution)
//!
//! ## Trust Boundary
//!
//! Rich text (paragraphs, list items, quote text, LaTeX) is author markup and
//! is emitted verbatim. Plain text (titles, headers, captions, alt text, tags)
//! is escaped. [`ToHtml`] makes the choice per type, not per call site.
//!
//! ## Floated Images
//!
//! Every block is wrapped in a block container except images aligned
//! `float-left` or `float-right`, which are emitted bare so that the blocks
//! after them wrap around the image.
//!
//! Math is emitted with delimiters only; typesetting is left to the caller.

mod blocks;
pub mod escape;
mod metadata;
pub mod options;

pub use escape::{ToHtml, escape_html};
pub use options::{CssClasses, MathDelimiters, RenderOptions};

use crate::models::{CanonicalContent, ContentBlock, Solution};

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render(&self, content: &CanonicalContent) -> String {
        let classes = &self.options.css_classes;
        let mut parts = Vec::with_capacity(3);

        if self.options.include_metadata {
            parts.push(metadata::render_metadata(&content.metadata));
        }

        parts.push(format!(
            "<section class=\"{}\">\n{}\n</section>",
            classes.statement,
            self.render_blocks(&content.statement)
        ));

        let solutions = content.solutions();
        if !solutions.is_empty() {
            parts.push(self.render_solutions(solutions));
        }

        log::debug!(
            "rendered content {}: {} statement block(s), {} solution(s)",
            content.metadata.id,
            content.statement.len(),
            solutions.len()
        );

        format!("<div class=\"{}\">\n{}\n</div>", classes.wrapper, parts.join("\n"))
    }

    /// Renders blocks in order, one fragment per line. Unsupported blocks are
    /// dropped.
    pub fn render_blocks(&self, blocks: &[ContentBlock]) -> String {
        blocks
            .iter()
            .map(|block| self.render_block(block))
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_block(&self, block: &ContentBlock) -> String {
        blocks::render_block(block, &self.options)
    }

    fn render_solutions(&self, solutions: &[Solution]) -> String {
        let classes = &self.options.css_classes;
        let rendered: Vec<String> = solutions
            .iter()
            .map(|solution| {
                let body = self.render_blocks(&solution.blocks);
                let title = format!(
                    "<h3 class=\"solution-title\">{}</h3>",
                    solution.title.to_html()
                );
                if body.is_empty() {
                    format!("<div class=\"{}\">\n{title}\n</div>", classes.solution)
                } else {
                    format!("<div class=\"{}\">\n{title}\n{body}\n</div>", classes.solution)
                }
            })
            .collect();

        format!(
            "<section class=\"{}\">\n{}\n</section>",
            classes.solutions,
            rendered.join("\n")
        )
    }
}

/// Renders `content` with the given options.
pub fn render(content: &CanonicalContent, options: &RenderOptions) -> String {
    Renderer::new(options.clone()).render(content)
}

/// Renders a block sequence with the given options.
pub fn render_blocks(blocks: &[ContentBlock], options: &RenderOptions) -> String {
    Renderer::new(options.clone()).render_blocks(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentType, ImageAlignment, ImageData, Metadata, PlainText};
    use insta::assert_snapshot;

    fn content() -> CanonicalContent {
        CanonicalContent {
            metadata: Metadata {
                id: 12,
                title: PlainText::from("Area of a circle"),
                content_type: ContentType::Lesson,
                category: None,
                difficulty: None,
                tags: vec![],
                author: None,
                draft: true,
                timestamp: None,
            },
            statement: vec![
                ContentBlock::header("Setup", 2),
                ContentBlock::paragraph("The area is"),
                ContentBlock::math("A = \\pi r^2", true),
            ],
            solutions: None,
        }
    }

    #[test]
    fn test_render_without_metadata() {
        let renderer = Renderer::new(RenderOptions {
            include_metadata: false,
            ..RenderOptions::default()
        });

        assert_snapshot!(renderer.render(&content()), @r#"
        <div class="math-content">
        <section class="content-statement">
        <div class="content-block" data-block-type="header"><h2>Setup</h2></div>
        <div class="content-block" data-block-type="paragraph"><p>The area is</p></div>
        <div class="content-block" data-block-type="math"><div class="math math-display">$$A = \pi r^2$$</div></div>
        </section>
        </div>
        "#);
    }

    #[test]
    fn test_metadata_comes_first_when_enabled() {
        let html = Renderer::default().render(&content());

        let header = html.find("content-metadata").unwrap();
        let statement = html.find("content-statement").unwrap();
        assert!(header < statement);
    }

    #[test]
    fn test_empty_solutions_section_is_omitted() {
        let mut content = content();
        content.solutions = Some(vec![]);

        assert!(!Renderer::default().render(&content).contains("content-solutions"));
    }

    #[test]
    fn test_solutions_render_in_order_with_titles() {
        let mut content = content();
        content.solutions = Some(vec![
            Solution {
                title: PlainText::from("First"),
                blocks: vec![ContentBlock::paragraph("one")],
            },
            Solution {
                title: PlainText::from("Second <alt>"),
                blocks: vec![],
            },
        ]);

        let html = Renderer::default().render(&content);
        let first = html.find("<h3 class=\"solution-title\">First</h3>").unwrap();
        let second = html
            .find("<h3 class=\"solution-title\">Second &lt;alt&gt;</h3>")
            .unwrap();
        assert!(first < second);
        assert!(html.contains("<section class=\"content-solutions\">"));
    }

    #[test]
    fn test_custom_css_classes_are_used_verbatim() {
        let options = RenderOptions {
            css_classes: CssClasses {
                wrapper: "w".to_string(),
                statement: "s".to_string(),
                solutions: "ss".to_string(),
                solution: "so".to_string(),
                block: "b".to_string(),
            },
            ..RenderOptions::default()
        };

        let html = render(&content(), &options);
        assert!(html.starts_with("<div class=\"w\">"));
        assert!(html.contains("<section class=\"s\">"));
        assert!(html.contains("<div class=\"b\" data-block-type=\"header\">"));
    }

    #[test]
    fn test_unsupported_block_does_not_blank_the_document() {
        let blocks = vec![
            ContentBlock::paragraph("before"),
            ContentBlock::Unsupported {
                kind: "poll".to_string(),
                data: serde_json::Value::Null,
            },
            ContentBlock::paragraph("after"),
        ];

        let html = render_blocks(&blocks, &RenderOptions::default());
        assert_eq!(html.lines().count(), 2);
        assert!(html.contains("before"));
        assert!(html.contains("after"));
    }

    #[test]
    fn test_floated_image_precedes_text_without_container() {
        let blocks = vec![
            ContentBlock::Image(ImageData {
                alignment: Some(ImageAlignment::FloatRight),
                ..ImageData::new("/a.png")
            }),
            ContentBlock::paragraph("wraps"),
        ];

        let html = render_blocks(&blocks, &RenderOptions::default());
        assert!(html.starts_with("<figure class=\"content-image image-align-float-right"));
    }
}
