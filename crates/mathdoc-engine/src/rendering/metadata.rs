use crate::models::Metadata;

use super::escape::{ToHtml, escape_html};

/// Title plus category, difficulty and tag badges.
pub(super) fn render_metadata(metadata: &Metadata) -> String {
    let mut badges = String::new();

    if let Some(category) = metadata.category {
        badges.push_str(&format!(
            "<span class=\"badge badge-category\">{}</span>",
            escape_html(category.as_str())
        ));
    }

    if let Some(difficulty) = metadata.difficulty {
        let label = difficulty.as_str();
        badges.push_str(&format!(
            "<span class=\"badge badge-difficulty badge-difficulty-{}\">{}</span>",
            label.to_lowercase(),
            escape_html(label)
        ));
    }

    for tag in &metadata.tags {
        badges.push_str(&format!("<span class=\"badge badge-tag\">#{}</span>", tag.to_html()));
    }

    format!(
        "<header class=\"content-metadata\">\n<h1 class=\"content-title\">{}</h1>\n<div class=\"content-badges\">{badges}</div>\n</header>",
        metadata.title.to_html()
    )
}
