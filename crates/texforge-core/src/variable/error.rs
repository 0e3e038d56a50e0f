use thiserror::Error;

use super::kind::VariableKind;

/// Errors raised by variable construction, typed access and path resolution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VariableError {
    // Validation errors
    #[error("EMPTY_STRING: string variable must not be empty or whitespace")]
    EmptyString,

    #[error("STRING_TOO_LONG: string has {length} characters (max {max})")]
    StringTooLong { length: usize, max: usize },

    #[error("NEGATIVE_NUMBER: {0} is negative")]
    NegativeNumber(f64),

    #[error("NUMBER_TOO_LARGE: {value} exceeds {max}")]
    NumberTooLarge { value: f64, max: f64 },

    #[error("NOT_A_NUMBER: number variable must not be NaN")]
    NotANumber,

    #[error("ARRAY_TOO_LARGE: array has {length} elements (max {max})")]
    ArrayTooLarge { length: usize, max: usize },

    #[error("OBJECT_TOO_LARGE: object has {keys} keys (max {max})")]
    ObjectTooLarge { keys: usize, max: usize },

    // Access errors
    #[error("TYPE_MISMATCH: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: VariableKind,
        actual: VariableKind,
    },

    #[error("NOT_FOUND: key '{segment}' not found while resolving '{path}'")]
    NotFound { path: String, segment: String },

    #[error("NOT_AN_OBJECT: '{segment}' is {kind}, not an object, while resolving '{path}'")]
    NotAnObject {
        path: String,
        segment: String,
        kind: VariableKind,
    },

    #[error("INVALID_VARIABLE: '{key}': {source}")]
    InvalidEntry {
        key: String,
        #[source]
        source: Box<VariableError>,
    },
}

impl VariableError {
    /// True for errors raised by typed construction or strict validation
    pub fn is_validation(&self) -> bool {
        match self {
            VariableError::EmptyString
            | VariableError::StringTooLong { .. }
            | VariableError::NegativeNumber(_)
            | VariableError::NumberTooLarge { .. }
            | VariableError::NotANumber
            | VariableError::ArrayTooLarge { .. }
            | VariableError::ObjectTooLarge { .. } => true,
            VariableError::InvalidEntry { source, .. } => source.is_validation(),
            VariableError::TypeMismatch { .. }
            | VariableError::NotFound { .. }
            | VariableError::NotAnObject { .. } => false,
        }
    }

    pub(crate) fn not_found(path: &str, segment: &str) -> Self {
        VariableError::NotFound {
            path: path.to_string(),
            segment: segment.to_string(),
        }
    }

    pub(crate) fn not_an_object(path: &str, segment: &str, kind: VariableKind) -> Self {
        VariableError::NotAnObject {
            path: path.to_string(),
            segment: segment.to_string(),
            kind,
        }
    }
}
