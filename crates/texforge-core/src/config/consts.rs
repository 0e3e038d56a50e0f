//! Limits and well-known names shared across the workspace

/// Variable validation limits
pub mod variable {
    /// Maximum characters in a string variable (after trimming)
    pub const MAX_STRING_CHARS: usize = 1000;

    /// Largest accepted number variable
    pub const MAX_NUMBER: f64 = 1e10;

    /// Maximum elements in an array variable
    pub const MAX_ARRAY_LEN: usize = 1000;

    /// Maximum keys in an object variable
    pub const MAX_OBJECT_KEYS: usize = 1000;
}

/// Rendering defaults
pub mod render {
    /// Default opening placeholder delimiter
    pub const DEFAULT_LEFT_DELIMITER: &str = "{{";

    /// Default closing placeholder delimiter
    pub const DEFAULT_RIGHT_DELIMITER: &str = "}}";
}

/// Config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "texforge.toml";
