use std::fmt;

use serde_json::Value;

/// Runtime type of a [`Variable`](super::Variable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Null,
}

impl VariableKind {
    /// Lowercase variant name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            VariableKind::String => "string",
            VariableKind::Number => "number",
            VariableKind::Boolean => "boolean",
            VariableKind::Array => "array",
            VariableKind::Object => "object",
            VariableKind::Null => "null",
        }
    }

    /// Kind a raw value would be inferred as
    pub fn of_raw(value: &Value) -> Self {
        match value {
            Value::String(_) => VariableKind::String,
            Value::Number(_) => VariableKind::Number,
            Value::Bool(_) => VariableKind::Boolean,
            Value::Array(_) => VariableKind::Array,
            Value::Object(_) => VariableKind::Object,
            Value::Null => VariableKind::Null,
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
