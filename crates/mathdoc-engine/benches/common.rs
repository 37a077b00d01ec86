use serde_json::{Value, json};

/// A valid problem document cycling through every block type.
pub fn generate_document(blocks: usize) -> Value {
    let statement: Vec<Value> = (0..blocks)
        .map(|i| match i % 6 {
            0 => json!({"type": "header", "data": {"text": format!("Part {i}"), "level": 2}}),
            1 => json!({"type": "paragraph", "data": {"text": format!("Let $x_{i}$ be <em>positive</em>.")}}),
            2 => json!({"type": "list", "data": {"style": "ordered", "items": ["first", "second & third"]}}),
            3 => json!({"type": "quote", "data": {"text": "Think geometrically.", "caption": "Coach"}}),
            4 => json!({"type": "math", "data": {"latex": format!("\\sum_{{k=1}}^{{{i}}} k"), "display": i % 2 == 0}}),
            _ => json!({"type": "image", "data": {"url": format!("/img/{i}.png"), "alignment": "float-left"}}),
        })
        .collect();

    json!({
        "metadata": {
            "id": 1,
            "title": "Generated benchmark problem",
            "contentType": "problem",
            "category": "Algebra",
            "difficulty": "Hard",
            "tags": ["bench", "generated"]
        },
        "statement": statement,
        "solutions": [{"title": "Outline", "blocks": [{"type": "paragraph", "data": {"text": "Induct."}}]}]
    })
}
