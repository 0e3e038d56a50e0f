//! Render error types

use std::fmt;

/// Rendering errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A placeholder delimiter was configured as an empty string
    EmptyDelimiter {
        /// Which delimiter was empty ("left" or "right")
        side: &'static str,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EmptyDelimiter { side } => {
                write!(f, "EMPTY_DELIMITER: {} delimiter must not be empty", side)
            }
        }
    }
}

impl std::error::Error for RenderError {}
