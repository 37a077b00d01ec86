use serde_json::Value;

use super::diagnostics::Diagnostics;
use super::error::ErrorCode;
use super::path::FieldPath;

pub const MAX_SOLUTION_TITLE_CHARS: usize = 100;

impl Diagnostics {
    pub(crate) fn check_solutions(&mut self, value: &Value, path: &FieldPath) {
        let Some(solutions) = value.as_array() else {
            self.push(path, ErrorCode::InvalidType, "solutions must be an array");
            return;
        };

        for (i, solution) in solutions.iter().enumerate() {
            let solution_path = path.index(i);
            let Some(solution) = self.expect_object(solution, &solution_path, "Solution") else {
                continue;
            };

            self.bounded_title(
                solution.get("title"),
                &solution_path.field("title"),
                MAX_SOLUTION_TITLE_CHARS,
                "Solution title",
            );

            let blocks_path = solution_path.field("blocks");
            match solution.get("blocks") {
                None => self.push(&blocks_path, ErrorCode::MissingRequired, "Missing required field: blocks"),
                Some(blocks) => self.check_block_array(blocks, &blocks_path),
            }
        }
    }
}
