use std::fmt;

/// Locator for a value inside the input document.
///
/// Fields join with `.` and array elements use `[i]`, so the path mirrors the
/// input's nesting: `solutions[1].blocks[0].data.level`. The empty path is the
/// document itself and displays as `root`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    pub const ROOT: &'static str = "root";

    pub fn root() -> Self {
        Self::default()
    }

    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str(Self::ROOT)
        } else {
            f.write_str(&self.0)
        }
    }
}
