use serde::{Deserialize, Serialize};

use super::error::RenderError;
use crate::config::consts::render::{DEFAULT_LEFT_DELIMITER, DEFAULT_RIGHT_DELIMITER};

/// Opening and closing placeholder markers, e.g. `{{` / `}}`
///
/// Both sides are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDelimiters")]
pub struct Delimiters {
    left: String,
    right: String,
}

#[derive(Deserialize)]
struct RawDelimiters {
    left: String,
    right: String,
}

impl TryFrom<RawDelimiters> for Delimiters {
    type Error = RenderError;

    fn try_from(raw: RawDelimiters) -> Result<Self, Self::Error> {
        Delimiters::new(raw.left, raw.right)
    }
}

impl Delimiters {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Result<Self, RenderError> {
        let left = left.into();
        let right = right.into();
        if left.is_empty() {
            return Err(RenderError::EmptyDelimiter { side: "left" });
        }
        if right.is_empty() {
            return Err(RenderError::EmptyDelimiter { side: "right" });
        }
        Ok(Self { left, right })
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    /// Placeholder token for a top-level key: `left + "." + key + right`
    pub fn placeholder(&self, key: &str) -> String {
        format!("{}.{}{}", self.left, key, self.right)
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            left: DEFAULT_LEFT_DELIMITER.to_string(),
            right: DEFAULT_RIGHT_DELIMITER.to_string(),
        }
    }
}
