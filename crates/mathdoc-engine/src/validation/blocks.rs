use serde_json::{Map, Value};
use url::Url;

use super::diagnostics::{Diagnostics, is_member};
use super::error::ErrorCode;
use super::path::FieldPath;
use crate::models::{BlockKind, ImageAlignment, ImageSize, ListStyle, describe_allowed};

pub const MIN_HEADER_LEVEL: u64 = 1;
pub const MAX_HEADER_LEVEL: u64 = 6;

type Data = Map<String, Value>;

impl Diagnostics {
    /// Used for `statement` and every `solutions[i].blocks`.
    pub(crate) fn check_block_array(&mut self, value: &Value, path: &FieldPath) {
        let Some(blocks) = value.as_array() else {
            self.push(path, ErrorCode::InvalidType, "Blocks must be an array");
            return;
        };

        if blocks.is_empty() {
            self.push(path, ErrorCode::ArrayEmpty, "At least one block is required");
            return;
        }

        for (i, block) in blocks.iter().enumerate() {
            self.check_block(block, &path.index(i));
        }
    }

    fn check_block(&mut self, value: &Value, path: &FieldPath) {
        let Some(block) = self.expect_object(value, path, "Block") else {
            return;
        };

        let type_path = path.field("type");
        let Some(kind) = block.get("type") else {
            self.push(&type_path, ErrorCode::MissingRequired, "Missing required field: type");
            return;
        };
        let Some(kind) = kind.as_str().and_then(|k| k.parse::<BlockKind>().ok()) else {
            self.push(
                &type_path,
                ErrorCode::InvalidValue,
                format!("type must be one of: {}", describe_allowed(BlockKind::ALL)),
            );
            return;
        };

        let data_path = path.field("data");
        let Some(data) = block.get("data").and_then(Value::as_object) else {
            self.push(&data_path, ErrorCode::InvalidType, "data must be an object");
            return;
        };

        match kind {
            BlockKind::Paragraph => self.check_paragraph(data, &data_path),
            BlockKind::Header => self.check_header(data, &data_path),
            BlockKind::List => self.check_list(data, &data_path),
            BlockKind::Quote => self.check_quote(data, &data_path),
            BlockKind::Math => self.check_math(data, &data_path),
            BlockKind::Image => self.check_image(data, &data_path),
        }
    }

    fn check_paragraph(&mut self, data: &Data, path: &FieldPath) {
        self.required_text(data, "text", path);
    }

    fn check_header(&mut self, data: &Data, path: &FieldPath) {
        self.required_text(data, "text", path);

        let level_path = path.field("level");
        match data.get("level") {
            None => self.push(&level_path, ErrorCode::MissingRequired, "Missing required field: level"),
            Some(level) => {
                let in_range = level
                    .as_u64()
                    .is_some_and(|l| (MIN_HEADER_LEVEL..=MAX_HEADER_LEVEL).contains(&l));
                if !in_range {
                    self.push(
                        &level_path,
                        ErrorCode::InvalidValue,
                        format!("level must be an integer from {MIN_HEADER_LEVEL} to {MAX_HEADER_LEVEL}"),
                    );
                }
            }
        }
    }

    fn check_list(&mut self, data: &Data, path: &FieldPath) {
        if !data.get("style").is_some_and(is_member::<ListStyle>) {
            self.push(
                &path.field("style"),
                ErrorCode::InvalidValue,
                format!("style must be one of: {}", describe_allowed(ListStyle::ALL)),
            );
        }

        let items_path = path.field("items");
        let Some(items) = data.get("items").and_then(Value::as_array) else {
            self.push(&items_path, ErrorCode::InvalidType, "items must be an array");
            return;
        };
        if items.is_empty() {
            self.push(&items_path, ErrorCode::ArrayEmpty, "A list needs at least one item");
            return;
        }
        for (i, item) in items.iter().enumerate() {
            if !item.is_string() {
                self.push(&items_path.index(i), ErrorCode::InvalidType, "List item must be a string");
            }
        }
    }

    fn check_quote(&mut self, data: &Data, path: &FieldPath) {
        self.required_text(data, "text", path);
        self.optional_string(data, "caption", path);
    }

    fn check_math(&mut self, data: &Data, path: &FieldPath) {
        self.required_text(data, "latex", path);

        if !data.get("display").is_some_and(Value::is_boolean) {
            self.push(&path.field("display"), ErrorCode::InvalidType, "display must be a boolean");
        }
    }

    fn check_image(&mut self, data: &Data, path: &FieldPath) {
        if let Some(url) = self.required_text(data, "url", path)
            && !is_acceptable_image_url(url)
        {
            self.push(
                &path.field("url"),
                ErrorCode::InvalidValue,
                "url must be an absolute URL, a root-relative path or a data URI",
            );
        }

        self.optional_string(data, "alt", path);
        self.optional_string(data, "caption", path);

        if let Some(alignment) = data.get("alignment")
            && !is_member::<ImageAlignment>(alignment)
        {
            self.push(
                &path.field("alignment"),
                ErrorCode::InvalidValue,
                format!("alignment must be one of: {}", describe_allowed(ImageAlignment::ALL)),
            );
        }

        if let Some(size) = data.get("size")
            && !is_member::<ImageSize>(size)
        {
            self.push(
                &path.field("size"),
                ErrorCode::InvalidValue,
                format!("size must be one of: {}", describe_allowed(ImageSize::ALL)),
            );
        }
    }
}

/// Absolute URLs, root-relative paths and data URIs are accepted.
pub fn is_acceptable_image_url(url: &str) -> bool {
    url.starts_with('/') || url.starts_with("data:") || Url::parse(url).is_ok()
}
