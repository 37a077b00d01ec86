use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::json;

use mathdoc_engine::{
    CanonicalContent, ContentBlock, MathDelimiters, RenderOptions, Renderer, render_blocks,
};

fn fixture(name: &str) -> CanonicalContent {
    let json = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.json",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    CanonicalContent::from_json_str(&json).unwrap()
}

fn blocks(value: serde_json::Value) -> Vec<ContentBlock> {
    serde_json::from_value(value).unwrap()
}

#[test]
fn problem_fixture_renders_deterministically() {
    let html = Renderer::default().render(&fixture("problem"));

    assert_snapshot!(html, @r#"
    <div class="math-content">
    <header class="content-metadata">
    <h1 class="content-title">Tangent lines to a circle</h1>
    <div class="content-badges"><span class="badge badge-category">Geometry</span><span class="badge badge-difficulty badge-difficulty-medium">Medium</span><span class="badge badge-tag">#circles</span><span class="badge badge-tag">#tangents</span><span class="badge badge-tag">#pythagoras</span></div>
    </header>
    <section class="content-statement">
    <div class="content-block" data-block-type="header"><h2>Problem</h2></div>
    <figure class="content-image image-align-float-right image-size-small"><img src="/uploads/circle.png" alt="Circle with two tangents"><figcaption>Figure 1</figcaption></figure>
    <div class="content-block" data-block-type="paragraph"><p>From a point $P$ outside a circle of radius $r$, two tangents are drawn.</p></div>
    <div class="content-block" data-block-type="list"><ol><li>Show that the tangents have equal length.</li><li>Find the length when $|OP| = d$.</li></ol></div>
    <div class="content-block" data-block-type="quote"><blockquote><p>Draw the radius to the point of tangency.</p><footer><cite>Hint</cite></footer></blockquote></div>
    </section>
    <section class="content-solutions">
    <div class="content-solution">
    <h3 class="solution-title">Using right triangles</h3>
    <div class="content-block" data-block-type="paragraph"><p>The radius is perpendicular to the tangent, so</p></div>
    <div class="content-block" data-block-type="math"><div class="math math-display">$$\ell = \sqrt{d^2 - r^2}$$</div></div>
    </div>
    </section>
    </div>
    "#);
}

#[test]
fn rendering_is_repeatable() {
    let content = fixture("lesson");
    let renderer = Renderer::default();

    assert_eq!(renderer.render(&content), renderer.render(&content));
}

#[test]
fn lesson_without_solutions_has_no_solutions_section() {
    let html = Renderer::default().render(&fixture("lesson"));

    assert!(!html.contains("content-solutions"));
    assert!(html.contains("<span class=\"badge badge-difficulty badge-difficulty-easy\">Easy</span>"));
    assert!(html.contains("<span class=\"math math-inline\">$n! = n \\cdot (n-1) \\cdots 1$</span>"));
}

#[test]
fn floated_image_is_not_wrapped_but_centered_image_is() {
    let floated = blocks(json!([
        {"type": "image", "data": {"url": "a.png", "alignment": "float-left", "size": "medium"}},
        {"type": "paragraph", "data": {"text": "hi"}}
    ]));
    let centered = blocks(json!([
        {"type": "image", "data": {"url": "a.png", "alignment": "center", "size": "medium"}},
        {"type": "paragraph", "data": {"text": "hi"}}
    ]));

    let options = RenderOptions::default();
    let floated_html = render_blocks(&floated, &options);
    let centered_html = render_blocks(&centered, &options);

    let floated_lines: Vec<_> = floated_html.lines().collect();
    let centered_lines: Vec<_> = centered_html.lines().collect();

    assert!(floated_lines[0].starts_with("<figure"));
    assert!(floated_lines[0].ends_with("</figure>"));
    assert!(centered_lines[0].starts_with("<div class=\"content-block\" data-block-type=\"image\"><figure"));
    assert!(centered_lines[0].ends_with("</figure></div>"));

    // The following paragraph is identical either way.
    assert_eq!(floated_lines[1], centered_lines[1]);
}

#[test]
fn header_text_is_escaped_but_paragraph_text_is_not() {
    let html = render_blocks(
        &blocks(json!([
            {"type": "header", "data": {"text": "<b>x</b>", "level": 1}},
            {"type": "paragraph", "data": {"text": "<b>x</b>"}}
        ])),
        &RenderOptions::default(),
    );

    let lines: Vec<_> = html.lines().collect();
    assert!(lines[0].contains("<h1>&lt;b&gt;x&lt;/b&gt;</h1>"));
    assert!(lines[1].contains("<p><b>x</b></p>"));
}

#[test]
fn image_base_url_is_prefixed() {
    let options = RenderOptions {
        image_base_url: "https://cdn.example.com".to_string(),
        ..RenderOptions::default()
    };

    let html = Renderer::new(options).render(&fixture("problem"));
    assert!(html.contains("src=\"https://cdn.example.com/uploads/circle.png\""));
}

#[test]
fn katex_delimiters_apply_to_every_math_block() {
    let options = RenderOptions {
        math_delimiters: MathDelimiters::Katex,
        include_metadata: false,
        ..RenderOptions::default()
    };

    let html = Renderer::new(options).render(&fixture("problem"));
    assert!(html.contains("\\[\\ell = \\sqrt{d^2 - r^2}\\]"));
    assert!(!html.contains("$$"));
    assert!(!html.contains("content-metadata"));
}

#[test]
fn unknown_block_type_is_skipped_without_failing() {
    let html = render_blocks(
        &blocks(json!([
            {"type": "carousel", "data": {"slides": 3}},
            {"type": "paragraph", "data": {"text": "still here"}}
        ])),
        &RenderOptions::default(),
    );

    assert_eq!(
        html,
        "<div class=\"content-block\" data-block-type=\"paragraph\"><p>still here</p></div>"
    );
}
